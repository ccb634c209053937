// HR round preparation: a graded knowledge quiz and an LLM mock interview.
// Chat history lives in `SessionStore`, owned by `AppState`, never in globals.

pub mod handlers;
pub mod prompts;
pub mod quiz;
pub mod session;
