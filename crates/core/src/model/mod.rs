mod answer;
mod ids;
mod page;
mod progress;
mod submission;

pub use ids::{ItemId, ParseIdError};

pub use answer::{Answer, AnswerError, AnswerMarker};
pub use page::{ChecklistItem, ChecklistPage, PageError, SaveBanner};
pub use progress::{CompletionSet, Progress};
pub use submission::{ChecklistSubmission, OperatorInfo, sanitize_file_name};
