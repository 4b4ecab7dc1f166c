//! Prompt templates for article generation.

/// System prompt for standard generation.
pub const STANDARD_SYSTEM_PROMPT: &str = "You are an AI that generates SEO-optimized blog posts \
from YouTube video content. Your response MUST be a valid JSON object with NO extra text, \
explanations, or code blocks.";

/// System prompt for extended generation.
pub const EXTENDED_SYSTEM_PROMPT: &str = "You are an AI assistant that analyzes YouTube videos \
and creates comprehensive SEO-optimized blog posts with metrics and image suggestions. Your \
response MUST be a valid JSON object with NO extra text, explanations, or code blocks.";

/// Build the standard generation prompt: the four required article fields.
pub fn build_standard_prompt(title: &str, description: &str, transcript: &str) -> String {
    format!(
        r#"Generate a blog post based on this YouTube video:
Title: {title}
Description: {description}
Transcript: {transcript}

Include the following in your response:
1. An SEO-optimized title
2. The main content of the blog post (at least 2000 words, with proper HTML formatting)
3. A list of 5 relevant keywords
4. 5 image descriptions for AI image generation

Respond STRICTLY in this JSON format:
{{
  "title": "SEO optimized title",
  "content": "Full blog post content with HTML tags",
  "keywords": ["keyword1", "keyword2", "keyword3", "keyword4", "keyword5"],
  "imageDescriptions": ["image desc 1", "image desc 2", "image desc 3", "image desc 4", "image desc 5"]
}}"#
    )
}

/// Build the extended generation prompt: required fields plus meta
/// description, content metrics, top keywords, linking suggestions, external
/// resources, FAQs and a CTA.
pub fn build_extended_prompt(title: &str, description: &str, transcript: &str) -> String {
    format!(
        r#"Analyze the following YouTube video information and create an SEO-optimized blog post:

Title: {title}

Description: {description}

Transcript: {transcript}

Generate a blog post with the following:
1. An SEO-optimized title
2. A meta description
3. The main content of the blog post, properly formatted with HTML tags for headings, paragraphs, and lists. Include at least 5 sections with subheadings.
4. A list of 5 relevant keywords
5. Suggest 5 relevant image descriptions that could be used to generate or find stock images for the blog post. Make these descriptions detailed and vivid.
6. Analyze the SEO potential of this blog post, including:
   - Estimated search traffic potential (low, medium, high)
   - Keyword difficulty (easy, medium, hard)
   - Estimated click-through rate (CTR)
   - Estimated RPM (Revenue per Mille)
7. Extract and list the top 7 keywords from the generated content
8. Suggest 3 internal linking opportunities
9. Provide 5 relevant external resources (with URLs) to link in the article
10. Generate 3 potential frequently asked questions (FAQs) related to the topic
11. Suggest a call-to-action (CTA) for the end of the article

Format the output as a JSON object with the following structure:
{{
  "title": "SEO optimized title",
  "metaDescription": "SEO optimized meta description",
  "content": "The full blog post content with HTML tags for structure",
  "keywords": ["keyword1", "keyword2", "keyword3", "keyword4", "keyword5"],
  "imageDescriptions": ["description1", "description2", "description3", "description4", "description5"],
  "contentMetrics": {{
    "trafficPotential": "low/medium/high",
    "keywordDifficulty": "easy/medium/hard",
    "estimatedCTR": "0.XX",
    "estimatedRPM": "X.XX"
  }},
  "topKeywords": ["keyword1", "keyword2", "keyword3", "keyword4", "keyword5", "keyword6", "keyword7"],
  "internalLinkingSuggestions": ["suggestion1", "suggestion2", "suggestion3"],
  "externalResources": [
    {{ "title": "Resource 1", "url": "https://example.com/1" }},
    {{ "title": "Resource 2", "url": "https://example.com/2" }},
    {{ "title": "Resource 3", "url": "https://example.com/3" }},
    {{ "title": "Resource 4", "url": "https://example.com/4" }},
    {{ "title": "Resource 5", "url": "https://example.com/5" }}
  ],
  "faqs": [
    {{ "question": "FAQ 1", "answer": "Answer 1" }},
    {{ "question": "FAQ 2", "answer": "Answer 2" }},
    {{ "question": "FAQ 3", "answer": "Answer 3" }}
  ],
  "cta": "Call to action text"
}}"#
    )
}
