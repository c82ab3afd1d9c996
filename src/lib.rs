pub mod shared {
    pub mod core {
        pub mod json_number;
    }
    pub mod http {
        pub mod envelope;
    }
    pub mod infrastructure {
        pub mod json_array_file;
    }
}

pub mod modules {
    pub mod streams {
        pub mod core {
            pub mod id;
            pub mod ports;
            pub mod stream;
        }
        pub mod use_cases {
            pub mod get_stream {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod patch_stream {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_stream {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http;
            }
            pub mod outbound {
                pub mod in_memory_store;
                pub mod json_file_store;
            }
        }
    }
}

pub mod shell;
