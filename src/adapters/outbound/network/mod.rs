/// Network adapters for external API calls
mod figma_client;

pub use figma_client::FigmaClient;
