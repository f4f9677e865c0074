/// Context sent with whole chunks
pub const FULL_CONTEXT: &str = "Full PDF Summary";

/// Context sent with keyword-filtered sentences
pub const DEFAULT_FOCUS_CONTEXT: &str = "EV Disadvantages Only";

pub fn build_summary_prompt(text: &str, context: &str) -> String {
    format!(
        "Summarize the following research paper content. Context: {}. \
         Use only the information from the text and avoid generalizations. \
         Include any links, data, or proofs mentioned in the content.\n\n\
         Text:\n{}\n\n",
        context, text
    )
}
