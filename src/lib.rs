pub mod api_football;
pub mod config;
pub mod form;
pub mod http_client;
pub mod matchup;
pub mod outcome_prob;
pub mod replay;
pub mod report;
