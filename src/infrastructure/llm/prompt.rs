/// Fixed SOAP-note prompt. The transcript is the only runtime parameter.
pub const SOAP_PROMPT_TEMPLATE: &str = "Please analyze the following medical conversation and generate a SOAP report.
If the conversation is not medical-related, please state that it's not a medical conversation.

Conversation:
{transcript}

Format your response as follows:

**Subjective (S):**
- Patient's symptoms and concerns
- History of present illness
- Review of systems

**Objective (O):**
- Physical exam findings
- Vital signs (if mentioned)
- Test results (if mentioned)

**Assessment (A):**
- Diagnosis or impression
- Differential diagnosis (if applicable)

**Plan (P):**
- Diagnostic tests (if needed)
- Treatment plan
- Follow-up instructions
- Patient education";

pub fn build_soap_prompt(transcript: &str) -> String {
    SOAP_PROMPT_TEMPLATE.replace("{transcript}", transcript)
}
