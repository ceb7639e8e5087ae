// All LLM prompt constants for the flows module.
// Templates use `{name}` placeholders filled by flows::template::render.
// The output schema skeleton is appended by each flow, not written here.

// ────────────────────────────────────────────────────────────────────────────
// Profile extraction
// ────────────────────────────────────────────────────────────────────────────

pub const EXTRACT_PROFILE_PERSONA: &str = "You are an expert executive recruiter who reads \
    résumés and turns them into structured fractional-executive profiles.";

/// Replace: {availability_options}, {compensation_options}, {location_options}, {resume_text}
pub const EXTRACT_PROFILE_TEMPLATE: &str = r#"Extract a fractional executive profile from the résumé below.

Instructions:
1. name: the candidate's full name exactly as written on the résumé.
2. expertise: a 2-3 sentence summary of the candidate's core functional expertise and seniority.
3. industries: every industry the candidate has worked in, as short title-case names.
4. availability: pick the closest entry from this list, even when the résumé phrases it differently:
{availability_options}
   If availability is not stated, infer the nearest category from the candidate's recent engagement pattern.
5. compensation: pick the closest entry from this list:
{compensation_options}
   If compensation is not stated, infer the nearest category from the kinds of engagements listed.
6. locationPreference: pick the closest entry from this list:
{location_options}
7. city, state, country: the candidate's current location if the résumé states it, otherwise null. Do not guess.
8. keyAccomplishments: 3-5 accomplishments, one sentence each, keeping any numbers the résumé provides.

Never leave availability, compensation or locationPreference empty when a reasonable inference exists.
Copy option strings character for character.

RÉSUMÉ:
{resume_text}"#;

// ────────────────────────────────────────────────────────────────────────────
// Executive ↔ startup matching
// ────────────────────────────────────────────────────────────────────────────

pub const MATCH_PERSONA: &str =
    "You are an expert at matching fractional executives with early-stage startups.";

/// Replace: {executive_profile}, {startup_needs}
pub const MATCH_TEMPLATE: &str = r#"Evaluate how well the executive below fits the startup's needs.

Instructions:
1. matchScore: a number between 0 and 1 inclusive, where 0 is no fit and 1 is an ideal fit. Use the full continuous range; do not snap to fixed buckets.
2. rationale: 2-4 sentences citing the specific overlaps and gaps between the executive's experience and the startup's needs.
3. recommendation: 1-2 sentences advising the startup whether and how to engage this executive.

EXECUTIVE PROFILE:
{executive_profile}

STARTUP NEEDS:
{startup_needs}"#;

// ────────────────────────────────────────────────────────────────────────────
// Field rewriting
// ────────────────────────────────────────────────────────────────────────────

/// Replace: {subject}
pub const REWRITE_FIELD_PERSONA: &str =
    "You are an expert at writing {subject} for a marketplace that connects startups with fractional executives.";

/// Replace: {field_name}, {subject}, {field_structure}, {current_value}
pub const REWRITE_FIELD_TEMPLATE: &str = r#"Rewrite the "{field_name}" field of {subject}.

Instructions:
1. Keep every fact from the current value. Do not invent employers, numbers, titles or credentials.
2. Follow this target structure exactly:
{field_structure}
3. Use plain text. When bullets are required, start each bullet with a dash (-), not an asterisk.
4. Put only the rewritten field content in rewrittenText, with no preamble or commentary.

CURRENT VALUE:
{current_value}"#;

/// Target structure for one editable field.
#[derive(Debug, Clone, Copy)]
pub struct FieldGuide {
    pub field_name: &'static str,
    pub structure: &'static str,
}

pub const EXECUTIVE_PROFILE_FIELDS: &[FieldGuide] = &[
    FieldGuide {
        field_name: "Expertise Summary",
        structure: "Elevator pitch. Sentence 1: a headline naming the executive's functional specialty and seniority. \
            Sentences 2-3: the company stages and industries they have led through and the outcomes they are known for. \
            Final sentence: the kind of startup engagement they are looking for. 3-5 sentences, under 120 words.",
    },
    FieldGuide {
        field_name: "Key Accomplishments",
        structure: "3-5 bullets, one per line, each starting with a dash (-). \
            Each bullet compresses the Situation/Task/Action/Result (STAR) structure into one sentence: \
            the situation and task in a short clause, the action taken, then the result, quantified whenever the current value gives a number.",
    },
    FieldGuide {
        field_name: "Industries",
        structure: "A comma-separated list of at most 6 industry names in title case. No sentences, no trailing period.",
    },
    FieldGuide {
        field_name: "Professional Bio",
        structure: "Two short paragraphs written in the third person. Paragraph 1: career arc and signature strengths. \
            Paragraph 2: how they work with startups as a fractional leader. Under 150 words in total.",
    },
];

pub const JOB_DESCRIPTION_FIELDS: &[FieldGuide] = &[
    FieldGuide {
        field_name: "Role Title",
        structure: "A single role title under 50 characters, using a standard executive title such as \"Fractional CFO\". \
            No company name, no trailing punctuation.",
    },
    FieldGuide {
        field_name: "Role Description",
        structure: "Two short paragraphs. Paragraph 1: the mandate and what success looks like in the first 90 days. \
            Paragraph 2: the engagement shape (time commitment, reporting line, duration). Under 150 words.",
    },
    FieldGuide {
        field_name: "Responsibilities",
        structure: "4-6 bullets, one per line, each starting with a dash (-) followed by an action verb. One line per bullet.",
    },
    FieldGuide {
        field_name: "Requirements",
        structure: "4-6 bullets, one per line, each starting with a dash (-). List must-have requirements first, then nice-to-haves marked \"(preferred)\".",
    },
];

pub const STARTUP_PROFILE_FIELDS: &[FieldGuide] = &[
    FieldGuide {
        field_name: "Company Description",
        structure: "2-3 sentences: what the company does, who it serves, and its current stage. Under 80 words.",
    },
    FieldGuide {
        field_name: "Mission",
        structure: "One sentence in the present tense, under 25 words, free of buzzwords.",
    },
    FieldGuide {
        field_name: "Current Challenge",
        structure: "2-3 sentences: the single most pressing problem, why it matters now, \
            and what kind of senior leadership would unblock it.",
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Chat message rewriting
// ────────────────────────────────────────────────────────────────────────────

pub const REWRITE_CHAT_PERSONA: &str =
    "You are an expert at writing clear, professional messages between startup founders and executives.";

/// Replace: {current_value}
pub const REWRITE_CHAT_TEMPLATE: &str = r#"Rewrite the chat message below so it is clear, concise and professional while keeping the sender's intent and every concrete detail.

Instructions:
1. Do NOT add a greeting or salutation.
2. Do NOT add a sign-off, closing or signature.
3. Keep roughly the original length; never more than double it.
4. Put only the message body in rewrittenText.

MESSAGE:
{current_value}"#;

// ────────────────────────────────────────────────────────────────────────────
// Message drafting
// ────────────────────────────────────────────────────────────────────────────

pub const INTRODUCTION_PERSONA: &str = "You are an expert at writing warm, specific \
    introduction messages from fractional executives to startup founders.";

/// Replace: {executive_name}, {startup_name}, {startup_mission}, {startup_challenge},
///          {executive_expertise}, {executive_accomplishment}, {format_instruction}
pub const INTRODUCTION_TEMPLATE: &str = r#"Write an introduction message from {executive_name} to the founders of {startup_name}.

Context:
- Startup mission: {startup_mission}
- Startup's current challenge: {startup_challenge}
- Executive expertise: {executive_expertise}
- Executive's key accomplishment: {executive_accomplishment}

Instructions:
1. Write 3-4 short paragraphs.
2. Open by introducing {executive_name} and connecting their expertise to the mission of {startup_name}.
3. Explicitly reference the startup's current challenge, "{startup_challenge}", and outline how the executive would approach it.
4. Explicitly reference the accomplishment "{executive_accomplishment}" as evidence they have solved a similar problem before.
5. Close with a clear, low-pressure invitation to schedule a conversation.
6. {format_instruction}"#;

pub const FOLLOW_UP_PERSONA: &str = "You are an expert at writing polite, concise follow-up \
    messages from executives who have applied for a startup role.";

/// Replace: {executive_name}, {startup_name}, {role_title}, {executive_expertise}, {format_instruction}
pub const FOLLOW_UP_TEMPLATE: &str = r#"Write a follow-up message from {executive_name} to {startup_name} about their application.

Instructions:
1. Write 2-3 short paragraphs.
2. In the first paragraph, acknowledge the specific role applied for: "{role_title}".
3. In one or two sentences, restate how their expertise in {executive_expertise} fits that role.
4. Ask about next steps politely, without sounding impatient.
5. {format_instruction}"#;

pub const STATUS_CHANGE_PERSONA: &str = "You are an expert at writing candid, human messages \
    from startup founders to executives about their applications.";

/// Replace: {startup_name}, {executive_name}, {role_title}, {new_status},
///          {status_instructions}, {format_instruction}
pub const STATUS_CHANGE_TEMPLATE: &str = r#"Write a message from {startup_name} to {executive_name} about their application for the "{role_title}" role. The application status has changed to "{new_status}".

Instructions:
{status_instructions}
{format_instruction}"#;

pub const IN_REVIEW_INSTRUCTIONS: &str = "\
- Tone: appreciative and informative.
- Thank the executive for applying and tell them their application is now under active review.
- Set expectations about the next steps and rough timing without committing to an outcome.
- Keep it to 2 short paragraphs.";

pub const HIRED_INSTRUCTIONS: &str = "\
- Tone: warm, enthusiastic and congratulatory.
- Open by congratulating the executive on being selected for the role.
- Express excitement about working together and name one concrete next step, such as a kickoff call or onboarding.
- Keep it to 2-3 short paragraphs.";

pub const REJECTED_INSTRUCTIONS: &str = "\
- Tone: respectful, kind and direct.
- Thank the executive sincerely for their time and interest.
- State clearly that the team will not be moving forward with their application; do not offer vague hope.
- Wish them well in their search.
- Keep it to 2 short paragraphs.";
