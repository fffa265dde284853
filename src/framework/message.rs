//! # Request/Response Conventions
//!
//! Services talk over plain `mpsc` channels; replies travel back over a
//! `oneshot` channel embedded in the request itself. This module defines the
//! [`Responder`] alias that every request variant uses for its reply slot.
//!
//! A request enum looks like:
//!
//! ```rust,ignore
//! #[derive(Debug)]
//! pub enum CatalogRequest {
//!     GetProduct {
//!         id: ProductId,
//!         respond_to: Responder<Option<Product>>,
//!     },
//!     // ...
//! }
//! ```
//!
//! The reply payload is the whole contract: absence is `Option`, domain
//! failures are `Result<_, DomainError>`, and only channel breakage is
//! reported out-of-band as [`ActorError`](crate::framework::ActorError).

use tokio::sync::oneshot;

/// The reply slot carried by each request variant.
pub type Responder<T> = oneshot::Sender<T>;
