pub mod shared {
    pub mod errors {
        pub mod api_error;
        pub mod http_status_error;
        pub mod not_found;
        pub mod not_implemented;
    }
    pub mod infrastructure {
        pub mod logger;
    }
}

pub mod modules {
    pub mod cognito {
        pub mod core {
            pub mod authentication_result;
        }
        pub mod adapters {
            pub mod outbound {
                pub mod cognito_identity_provider;
            }
        }
    }
    pub mod dynamodb {
        pub mod core {
            pub mod pagination_token;
        }
    }
    pub mod sqs {
        pub mod core {
            pub mod queue_arn;
        }
        pub mod adapters {
            pub mod outbound {
                pub mod sqs_queues;
            }
        }
    }
    pub mod event_sourcing {
        pub mod core {
            pub mod command;
            pub mod domain_event;
            pub mod http_command;
        }
        pub mod ports {
            pub mod inbound_adapter;
            pub mod projector;
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http;
            }
            pub mod outbound {
                pub mod projections_in_memory;
            }
        }
    }
}

pub mod shell;
