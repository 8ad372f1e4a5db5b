/// Session adapters supplying the SW360 credential
mod static_token_session;

pub use static_token_session::StaticTokenSession;
