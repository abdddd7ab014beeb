//! Fixed prompt templates for the interview flow.
//!
//! Every model call made by the orchestrator uses one of these templates.
//! The summary templates pin the exact headings the summary parser looks
//! for, so template and parser must stay in sync.

/// Opening prompt establishing the interview structure and first question
pub const OPENING_PROMPT: &str = r#"You are an experienced Java technical interviewer.
This is a Java programming interview with 4 specific questions that must be asked in order.
Start with the first question from the list below.
Keep responses concise and professional.

Ask the first question from this list:
1. What is the difference between JDK, JRE, and JVM?
2. Is Java platform-independent? Why?
3. What are the main features of Java?
4. What is the difference between == and .equals()?

Start the interview by asking question 1: "What is the difference between JDK, JRE, and JVM?""#;

/// System message for continuation turns; combined with retrieved context
/// by the context assembler
pub const CONTINUATION_PROMPT: &str = r#"You are an experienced Java technical interviewer conducting a structured interview.
Based on the conversation history, ask the next question in sequence from this list:

1. What is the difference between JDK, JRE, and JVM?
2. Is Java platform-independent? Why?
3. What are the main features of Java?
4. What is the difference between == and .equals()?

Look at the conversation history to determine which question number to ask next.
Ask the questions in order and keep responses concise and professional."#;

/// Evaluation guidance shared by both summary templates
pub const EVALUATION_GUIDANCE: &str = r#"You are an experienced Java technical interviewer with expertise in communication assessment.
Analyze the candidate's responses to the Java interview questions carefully for:
1. Grammar and language usage
2. Communication clarity and coherence
3. Professionalism and appropriateness
4. Java technical knowledge demonstration
5. Understanding of Java concepts (JDK/JRE/JVM, platform independence, features, equality operators)
6. Response relevance and understanding

Provide honest, constructive feedback based on the actual content and quality of their responses.
Be specific about grammar issues, communication problems, Java knowledge gaps, and areas for improvement."#;

/// Message returned to the caller when a session auto-ends
pub const COMPLETION_MESSAGE: &str =
    "Thank you for completing the interview. Your responses have been evaluated.";

/// Wrap a context-assembled prompt when the upcoming question is the last one
pub fn final_question_prompt(prompt: &str) -> String {
    format!(
        "{prompt}\n\nThis is the final question of the interview. \
         Mention to the candidate that this is the last question."
    )
}

/// Prompt asking the model to classify an answer as relevant or not
pub fn validation_prompt(question: &str, response: &str) -> String {
    format!(
        r#"You are an AI assistant that validates whether a candidate's response is contextually relevant to the interview question asked.

Analyze the following:
QUESTION: {question}
RESPONSE: {response}

Determine if the response is:
1. Directly relevant to the question asked
2. Provides meaningful information related to the topic
3. Shows the candidate understood and attempted to answer the question

Respond with only one word:
- "RELEVANT" if the response appropriately addresses the question
- "IRRELEVANT" if the response is off-topic, nonsensical, or doesn't address the question

Consider responses as RELEVANT if they:
- Answer the question directly
- Provide related examples or experiences
- Show understanding of the topic even if incomplete

Consider responses as IRRELEVANT if they:
- Are completely unrelated to the question
- Are nonsensical or random text
- Deliberately avoid answering the question
- Are inappropriate or unprofessional"#
    )
}

/// Required output format block shared by both summary templates
const SUMMARY_OUTPUT_FORMAT: &str = r#"Your response MUST follow this exact format:

STRONG POINTS:
- [Specific strength observed in the responses]

WEAK POINTS:
- [Specific weakness observed in the responses]

GRAMMATICAL SCORE: [0-100]

TECHNICAL SCORE: [0-100]

PRACTICE POINTS:
- [Specific topic or skill the candidate should practice]"#;

/// Summary prompt for sessions where most answers addressed the questions
pub fn summary_prompt_relevant(transcript: &str, relevant: u32, total: u32) -> String {
    format!(
        r#"{EVALUATION_GUIDANCE}

## Interview Transcript

{transcript}

{relevant} of {total} candidate responses were contextually relevant to the questions asked.
Evaluate the candidate based on the actual content of their answers.

## Required Output Format

{SUMMARY_OUTPUT_FORMAT}"#
    )
}

/// Summary prompt for sessions where most answers were off-topic.
///
/// Grammar and technical ability are still scored from whatever content
/// exists, but the off-topic count is foregrounded.
pub fn summary_prompt_off_topic(transcript: &str, off_topic: u32, total: u32) -> String {
    format!(
        r#"{EVALUATION_GUIDANCE}

## Interview Transcript

{transcript}

{off_topic} of {total} candidate responses were off-topic or did not address the questions asked.
Weigh this heavily in your feedback: note the lack of engagement with the questions, but still
score grammar and technical ability from whatever content the candidate did provide.

## Required Output Format

{SUMMARY_OUTPUT_FORMAT}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_prompt_embeds_both_texts() {
        let prompt = validation_prompt("What is the JVM?", "It runs bytecode.");
        assert!(prompt.contains("QUESTION: What is the JVM?"));
        assert!(prompt.contains("RESPONSE: It runs bytecode."));
    }

    #[test]
    fn test_summary_prompts_pin_parser_headings() {
        let relevant = summary_prompt_relevant("Interviewer: q\nCandidate: a", 3, 4);
        let off_topic = summary_prompt_off_topic("Interviewer: q\nCandidate: a", 3, 4);

        for prompt in [&relevant, &off_topic] {
            assert!(prompt.contains("STRONG POINTS"));
            assert!(prompt.contains("WEAK POINTS"));
            assert!(prompt.contains("GRAMMATICAL SCORE"));
            assert!(prompt.contains("TECHNICAL SCORE"));
            assert!(prompt.contains("PRACTICE POINTS"));
        }

        assert!(relevant.contains("3 of 4 candidate responses were contextually relevant"));
        assert!(off_topic.contains("3 of 4 candidate responses were off-topic"));
    }

    #[test]
    fn test_final_question_prompt_appends_marker() {
        let wrapped = final_question_prompt("base prompt");
        assert!(wrapped.starts_with("base prompt"));
        assert!(wrapped.contains("final question"));
    }
}
