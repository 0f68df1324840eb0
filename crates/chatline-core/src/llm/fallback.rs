//! Rule-based fallback responder.
//!
//! Answers the user when the inference provider fails. Rules are evaluated
//! in order and the first match wins; the last rule always matches, so every
//! input maps to exactly one canned answer.
//!
//! Keyword checks are substring matches on the trimmed, lowercased message.

use std::fmt;

const GREETING: &str = "Hello! I'm an AI assistant. I can help you with coding, explanations, problem-solving, writing, data analysis, and much more. What would you like to explore?";

const CODE_SAMPLE: &str = "I'd be happy to help with Python code! Here's an example:

def example_function(n):
    result = []
    for i in range(n):
        result.append(i * 2)
    return result

print(example_function(5))

What specific functionality would you like?";

const PYTHON: &str = "Python is a versatile programming language used in web development, data science, machine learning, and automation. What aspect interests you?";

const MACHINE_LEARNING: &str = "Machine Learning enables systems to learn from data. Key concepts:

1. Supervised Learning: Learning from labeled data
2. Unsupervised Learning: Finding patterns in unlabeled data
3. Neural Networks: Deep learning models
4. Training: Optimizing model parameters

Popular libraries: scikit-learn, TensorFlow, PyTorch. What ML topic interests you?";

const DATA_SCIENCE: &str = "Data Science tools:

- Pandas: Data manipulation
- NumPy: Numerical computing
- Matplotlib/Seaborn: Visualization
- Scikit-learn: Machine learning

What data science task can I help with?";

const CAPABILITIES: &str = "I can assist with:

- Writing and debugging code
- Explaining programming concepts
- Data science and machine learning
- Problem-solving and algorithms
- Writing and editing
- Math and statistics

What would you like help with?";

const THANKS: &str = "You're welcome! Feel free to ask anything else.";

const DEFAULT: &str = "I'm here to help with programming, data analysis, machine learning, problem-solving, and more. What would you like to work on?";

/// Which canned answer a message was routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackRule {
    Greeting,
    CodeSample,
    Python,
    MachineLearning,
    DataScience,
    Capabilities,
    Thanks,
    Default,
}

impl FallbackRule {
    /// Every rule, in evaluation order.
    pub const ALL: [FallbackRule; 8] = [
        FallbackRule::Greeting,
        FallbackRule::CodeSample,
        FallbackRule::Python,
        FallbackRule::MachineLearning,
        FallbackRule::DataScience,
        FallbackRule::Capabilities,
        FallbackRule::Thanks,
        FallbackRule::Default,
    ];

    /// The fixed answer for this rule.
    pub fn response(self) -> &'static str {
        match self {
            FallbackRule::Greeting => GREETING,
            FallbackRule::CodeSample => CODE_SAMPLE,
            FallbackRule::Python => PYTHON,
            FallbackRule::MachineLearning => MACHINE_LEARNING,
            FallbackRule::DataScience => DATA_SCIENCE,
            FallbackRule::Capabilities => CAPABILITIES,
            FallbackRule::Thanks => THANKS,
            FallbackRule::Default => DEFAULT,
        }
    }

    fn matches(self, msg: &str) -> bool {
        let mentions_code = || mentions_any(msg, &["python", "code", "program"]);
        match self {
            FallbackRule::Greeting => mentions_any(msg, &["hello", "hi", "hey"]),
            FallbackRule::CodeSample => mentions_code() && mentions_any(msg, &["function", "write"]),
            FallbackRule::Python => mentions_code(),
            FallbackRule::MachineLearning => mentions_any(msg, &["machine learning", "ml", "ai"]),
            FallbackRule::DataScience => {
                msg.contains("data") && mentions_any(msg, &["science", "analysis", "pandas", "numpy"])
            }
            FallbackRule::Capabilities => {
                mentions_any(msg, &["help", "can you"]) || (msg.contains("what") && msg.contains("do"))
            }
            FallbackRule::Thanks => msg.contains("thank"),
            FallbackRule::Default => true,
        }
    }
}

impl fmt::Display for FallbackRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackRule::Greeting => write!(f, "greeting"),
            FallbackRule::CodeSample => write!(f, "code_sample"),
            FallbackRule::Python => write!(f, "python"),
            FallbackRule::MachineLearning => write!(f, "machine_learning"),
            FallbackRule::DataScience => write!(f, "data_science"),
            FallbackRule::Capabilities => write!(f, "capabilities"),
            FallbackRule::Thanks => write!(f, "thanks"),
            FallbackRule::Default => write!(f, "default"),
        }
    }
}

fn mentions_any(msg: &str, words: &[&str]) -> bool {
    words.iter().any(|w| msg.contains(w))
}

/// Deterministic keyword-based answer generator.
pub struct FallbackResponder;

impl FallbackResponder {
    /// Pick the first rule whose keywords appear in `message`.
    pub fn classify(message: &str) -> FallbackRule {
        let normalized = message.trim().to_lowercase();
        FallbackRule::ALL
            .into_iter()
            .find(|rule| rule.matches(&normalized))
            .unwrap_or(FallbackRule::Default)
    }

    /// The canned answer for `message`.
    pub fn respond(message: &str) -> &'static str {
        Self::classify(message).response()
    }
}
