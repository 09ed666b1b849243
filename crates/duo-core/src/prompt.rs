use crate::language::{LanguagePair, gender_markers};
use crate::types::{Direction, GrammarMode, GrammarRequest, LookupRequest, Request};

const JSON_ONLY: &str =
    "Do not include any other text, explanations or code fences. Return only the JSON object.";

/// Build the prompt for `request` against the current language pair.
/// Pure function of its inputs.
pub fn build_prompt(request: &Request, pair: &LanguagePair) -> String {
    match request {
        Request::Lookup(req) => lookup_prompt(req, pair),
        Request::Grammar(req) => grammar_prompt(req, pair),
        Request::Analysis(req) => analysis_prompt(req, pair),
    }
}

pub fn lookup_prompt(request: &LookupRequest, pair: &LanguagePair) -> String {
    let word = request.word();
    let source = &pair.source;
    let target = &pair.target;
    let gender = gender_hint(target);

    let task = match request.direction {
        Direction::SourceToTarget => {
            format!("Translate the {source} word '{word}' to {target}.")
        }
        Direction::TargetToSource => format!(
            "For the {target} word '{word}', give its {source} translation and describe the {target} word."
        ),
    };

    let translation = match request.direction {
        Direction::SourceToTarget => format!("the {target} translation"),
        Direction::TargetToSource => format!("the {source} translation"),
    };

    format!(
        "{task}

Return ONLY a JSON object with the following structure:
{{
    \"translation\": \"{translation}\",
    \"gender\": \"{gender}\",
    \"plural\": \"the {target} plural form, or an empty string if not applicable\",
    \"examples\": [\"example sentence 1 in {target}\", \"example sentence 2 in {target}\"]
}}

\"translation\", \"gender\" and \"plural\" are strings. \"examples\" is an array of exactly two strings.
{JSON_ONLY}"
    )
}

pub fn grammar_prompt(request: &GrammarRequest, pair: &LanguagePair) -> String {
    match request.mode {
        GrammarMode::Question => question_prompt(request, pair),
        GrammarMode::Correction => correction_prompt(request, pair),
    }
}

fn question_prompt(request: &GrammarRequest, pair: &LanguagePair) -> String {
    let text = request.text();
    let target = &pair.target;
    let source = &pair.source;

    format!(
        "Answer this {target} grammar question: '{text}'

Provide a clear, helpful explanation in {source} suitable for a language learner.
Include {target} examples when appropriate."
    )
}

fn correction_prompt(request: &GrammarRequest, pair: &LanguagePair) -> String {
    let text = request.text();
    let target = &pair.target;
    let source = &pair.source;

    format!(
        "Analyze this {target} sentence for grammar correctness: '{text}'

Return ONLY a JSON object with the following structure:
{{
    \"grammar check\": true or false (boolean, true if the grammar is correct),
    \"corrected version\": \"the corrected sentence if applicable, or the original if correct\",
    \"Applicable grammar explained\": \"explanation of the grammar rules in markdown format, written in {source}\"
}}

{JSON_ONLY}"
    )
}

pub fn analysis_prompt(request: &GrammarRequest, pair: &LanguagePair) -> String {
    let text = request.text();
    let target = &pair.target;
    let source = &pair.source;

    format!(
        "Analyze this {target} sentence or phrase: '{text}'

1. Check if the grammar is correct
2. If incorrect, provide the corrected version
3. Explain any grammar rules that apply
4. Provide additional examples if helpful

Write the explanation in {source} and format your response clearly for a language learner."
    )
}

fn gender_hint(target: &str) -> String {
    match gender_markers(target) {
        Some(markers) => format!("{markers} or an empty string if not applicable"),
        None => format!(
            "the grammatical gender marker of the {target} word, or an empty string if {target} does not mark gender"
        ),
    }
}
