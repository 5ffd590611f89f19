pub mod application {
    pub mod client {
        pub mod build;
    }
    pub mod config {
        pub mod get_api_key;
        pub mod get_config;
        pub mod require_api_key;
    }
}

pub mod domain {
    pub mod environment;
    pub mod logger;
    pub mod client {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod build;
        }
    }
    pub mod config {
        pub mod errors;
        pub mod model;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_api_key;
            pub mod get_config;
            pub mod require_api_key;
        }
    }
}
