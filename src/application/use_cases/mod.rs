/// Use cases module containing application business logic orchestration
mod build_graph;

pub use build_graph::BuildGraphUseCase;
