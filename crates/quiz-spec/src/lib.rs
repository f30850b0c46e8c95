#![allow(missing_docs)]

pub mod answers;
pub mod flow;
pub mod layout;
pub mod learn_more;
pub mod onboarding;
pub mod processor;
pub mod render;
pub mod responsive;
pub mod session;
pub mod spec;

pub use answers::{AnswerSet, Outcome};
pub use flow::{Navigation, QuizFlow};
pub use layout::{DeviceClass, HeroMetrics, Layout, Viewport};
pub use learn_more::{LearnMoreDeck, LearnMoreItem, NextAction};
pub use onboarding::OnboardingContent;
pub use processor::{Transition, process_answer};
pub use render::{
    RenderOption, RenderPayload, RenderProgress, RenderQuestion, RenderStatus,
    build_render_payload, render_json_ui, render_text,
};
pub use responsive::{Breakpoint, Breakpoints, ResponsiveValue};
pub use session::{BackNavigation, FlowState, QuizSession};
pub use spec::{AnswerValue, OutcomeCopy, Question, QuestionKind, QuizOption, QuizSpec, SpecError};
