use crate::command::show_config::ConfigSummary;

pub fn render(summary: &ConfigSummary) -> String {
    format!(
        "✓ Found API key: {}\n\
         \n\
         ✓ Nebius AI Configuration:\n\
         \x20 Vision Model: {}\n\
         \x20 Image Gen Model: {}\n\
         \x20 Base URL: {}\n\
         \n\
         ✓ Client ready: {}\n",
        summary.masked_api_key,
        summary.config.vision_model,
        summary.config.image_gen_model,
        summary.config.base_url,
        summary.client_kind,
    )
}
