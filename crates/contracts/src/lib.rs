//! Types shared between the POS page and the server it talks to.

pub mod domain;
