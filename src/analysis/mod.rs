//! Analysis boundary module
//!
//! Typed parsing of upstream meal analysis payloads and inbound requests.

pub mod payload;
pub mod request;

pub use payload::{parse_meal_nutrition, parse_voice_response, ParseError, VoiceAnalysis};
pub use request::{clean_description, MealAnalysisRequest, RequestError, VoiceEditRequest};
