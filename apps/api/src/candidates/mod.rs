// Candidate submissions: upload + scan + persistence, plus the admin views
// over stored scans.

pub mod handlers;
pub mod models;
