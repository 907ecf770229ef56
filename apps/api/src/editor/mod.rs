// Résumé editing: snapshot mutations, the edit command wire format, and the
// in-memory session store that holds each user's current snapshot.

pub mod commands;
pub mod handlers;
pub mod ids;
pub mod ops;
pub mod session;
