pub mod show_config;
