// Résumé balance analysis: how dense each section is.

pub mod balance;
pub mod handlers;
