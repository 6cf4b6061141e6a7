pub mod shared {
    pub mod application {
        pub mod errors;
    }
    pub mod infrastructure {
        pub mod event_store;
    }
}

pub mod modules {
    pub mod estimates {
        pub mod core {
            pub mod decision;
            pub mod estimate;
            pub mod events;
            pub mod evolve;
            pub mod line_items;
            pub mod projections;
            pub mod revision;
            pub mod state;
            pub mod status;
        }
        pub mod use_cases {
            pub mod create_estimate {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod revise_estimate {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod transition_estimate_status {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_estimates_by_project {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
                pub mod queries_port;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod projections;
                pub mod projections_in_memory;
            }
        }
    }
}

pub mod shell;
