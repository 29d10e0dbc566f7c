pub mod diagnostics_service;
