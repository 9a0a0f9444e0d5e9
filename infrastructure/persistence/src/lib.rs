pub mod storage;
pub mod cart {
    pub mod entity;
    pub mod repository;
}
