mod resolve_service;

pub use resolve_service::ResolveServiceUseCase;
