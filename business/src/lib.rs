pub mod application {
    pub mod cart {
        pub mod add_to_cart;
        pub mod decrement;
        pub mod hydrate;
        pub mod increment;
        pub mod provider;
        pub mod state;
    }
}

pub mod domain {
    pub mod errors;
    pub mod formatter;
    pub mod logger;
    pub mod navigation;
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod add_to_cart;
            pub mod decrement;
            pub mod hydrate;
            pub mod increment;
        }
    }
}
