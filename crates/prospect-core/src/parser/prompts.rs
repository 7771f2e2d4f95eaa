// Prompt templates for the LLM extraction backend.

pub const RESUME_PARSE_SYSTEM: &str = "\
You are a precise resume parser. \
Extract information from resume text into structured JSON. \
You MUST respond with valid JSON only — no markdown fences, no explanations. \
Never invent facts that are not present in the resume text.";

pub const RESUME_PARSE_PROMPT: &str = r#"Parse the following resume text into a structured JSON object.

RESUME TEXT:
{resume_text}

OUTPUT SCHEMA (return exactly this structure):
{
  "name": "string",
  "title": "current or most recent job title",
  "bio": "professional first-person summary, 3-4 sentences",
  "email": "string",
  "phone": "string",
  "location": "string",
  "desired_role": "string",
  "skills": ["string"],
  "experience": [{
    "company": "string", "role": "string",
    "start_date": "YYYY-MM-DD", "end_date": "YYYY-MM-DD" | "Present",
    "current": boolean,
    "description": "string", "technologies": ["string"]
  }],
  "education": [{
    "institution": "string", "degree": "string", "field": "string",
    "start_date": "YYYY-MM-DD", "end_date": "YYYY-MM-DD", "grade": "string"
  }],
  "projects": [{
    "name": "string", "description": "string", "technologies": ["string"],
    "github_url": "string", "live_url": "string"
  }],
  "achievements": [{
    "title": "string", "description": "string", "date": "YYYY-MM-DD"
  }]
}

RULES:
1. Dates must be "YYYY-MM-DD". Use "YYYY-01-01" if only the year is known.
2. A field that is absent from the resume must be "" (or [] for arrays) — never omit keys.
3. "current": true requires "end_date": "Present".
4. Every array must be present, empty if there is no data.
5. Return ONLY the JSON object — nothing else, no code fences."#;

pub const BIO_FALLBACK_SYSTEM: &str = "\
You are a professional bio writer. \
Write engaging first-person summaries for job seekers. \
Respond with the bio text only — no preamble, no quotes.";

pub const BIO_FALLBACK_PROMPT: &str = r#"Write a professional first-person bio (3-4 sentences) for a candidate with:

Name: {name}
Title: {title}
Most recent position: {position}
Skills: {skills}

Start with "I am" or similar, highlight expertise and achievements, and keep the tone professional yet engaging."#;
