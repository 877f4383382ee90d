//! Authentication
//!
//! Credential resolution for API-key based providers.

pub mod credentials;

pub use credentials::{
    CredentialResolver, CredentialSources, Credentials, LayeredCredentialResolver,
    ResolvedCredentials,
};
