mod mock_gateway;
mod ollama_gateway;

pub use mock_gateway::MockModelGateway;
pub use ollama_gateway::OllamaGateway;
