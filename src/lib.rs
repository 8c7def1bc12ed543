pub mod count;
pub mod rank;
pub mod report;
pub mod tokenize;

pub use count::count_occurrences;
pub use rank::{Ranking, rank};
pub use report::{ReportError, write_diagnostics, write_ranked};
pub use tokenize::{WordTokens, fold_token, is_word_token};
