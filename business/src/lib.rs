pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod clear;
        pub mod get;
        pub mod remove_item;
        pub mod update_item;
    }
    pub mod chat {
        pub mod send_message;
        pub mod show_more;
        pub mod start_session;
    }
    pub mod recommendation {
        pub mod recommend;
        pub mod warm_cache;
    }
    pub mod suggestion {
        pub mod generate;
        pub mod record;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod text;
        pub mod value_objects;
    }
    pub mod catalog {
        pub mod model;
        pub mod pricing;
        pub mod repository;
    }
    pub mod recommendation {
        pub mod cache;
        pub mod degraded;
        pub mod errors;
        pub mod extractor;
        pub mod model;
        pub mod pre_filter;
        pub mod prompt;
        pub mod services;
        pub mod use_cases {
            pub mod recommend;
            pub mod warm_cache;
        }
    }
    pub mod chat {
        pub mod errors;
        pub mod padding;
        pub mod repository;
        pub mod session;
        pub mod use_cases {
            pub mod send_message;
            pub mod show_more;
            pub mod start_session;
        }
    }
    pub mod cart {
        pub mod errors;
        pub mod events;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod get;
            pub mod remove_item;
            pub mod update_item;
        }
    }
    pub mod suggestion {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod generate;
            pub mod record;
        }
    }
}
