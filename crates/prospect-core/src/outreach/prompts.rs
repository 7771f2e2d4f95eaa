// Prompt templates for outreach email generation.

pub const EMAIL_TEMPLATE_SYSTEM: &str = "\
You are a professional email template generator for job seekers. \
You MUST respond with valid JSON only — no markdown fences, no explanations.";

pub const EMAIL_TEMPLATE_PROMPT: &str = r#"Create a {template_kind} email for a job application.

Return ONLY a JSON object with exactly this format:
{
  "subject": "brief and engaging email subject line",
  "body": "professional email body content"
}

Use these details to personalize the email:
- Candidate name: {name}
- Current title: {title}
- Target role: {target_role}
- Key skills: {skills}
{company_line}
Experience highlights:
{highlights}

Requirements:
1. Keep it concise (max 200 words)
2. Highlight relevant experience and skills
3. Show enthusiasm and cultural fit
4. Include a clear call to action
5. Maintain a professional tone
6. Return ONLY the JSON object — nothing else"#;
