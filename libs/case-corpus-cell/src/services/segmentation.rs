use std::sync::LazyLock;

use regex::Regex;

use crate::models::{CaseSegmentation, PastCase};

// US-style (03/01/2024, 3-1-24, 03.01.2024) or ISO-style (2024-03-01) at line start.
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}[/.-]\d{1,2}[/.-]\d{1,2}|\d{1,2}[/.-]\d{1,2}[/.-]\d{2,4})\b")
        .expect("date pattern is valid")
});

static FIELD_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(diagnos[ie]s|dx|treatments?|tx|outcomes?|results?)(?:\s*[:-]\s*|\s+)(.*)$")
        .expect("field label pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaseField {
    Diagnosis,
    Treatment,
    Outcome,
}

impl CaseField {
    const ORDER: [CaseField; 3] = [CaseField::Diagnosis, CaseField::Treatment, CaseField::Outcome];

    fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "dx" => CaseField::Diagnosis,
            l if l.starts_with("diagnos") => CaseField::Diagnosis,
            "tx" => CaseField::Treatment,
            l if l.starts_with("treatment") => CaseField::Treatment,
            _ => CaseField::Outcome,
        }
    }

    fn slot(self, case: &mut PastCase) -> &mut Vec<String> {
        match self {
            CaseField::Diagnosis => &mut case.diagnosis,
            CaseField::Treatment => &mut case.treatment,
            CaseField::Outcome => &mut case.outcome,
        }
    }
}

/// Splits extracted document text into past-case records.
///
/// A line starting with a date opens a new case. Labelled lines
/// (`Diagnosis`/`Dx`, `Treatment`/`Tx`, `Outcome`/`Result`, followed by `:`,
/// `-` or whitespace) fill their field; any other line fills the first still-empty field in the order
/// diagnosis, treatment, outcome. A case is kept only if it has at least one
/// diagnosis entry.
pub fn parse_cases(text: &str) -> CaseSegmentation {
    let mut segmentation = CaseSegmentation::default();
    let mut current: Option<PastCase> = None;

    for raw_line in text.lines() {
        let mut line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(date) = DATE_PATTERN.find(line) {
            flush(current.take(), &mut segmentation);
            current = Some(PastCase {
                date: date.as_str().to_string(),
                ..PastCase::default()
            });

            line = line[date.end()..]
                .trim_start_matches(|c: char| c.is_whitespace() || matches!(c, '-' | ':' | ','));
            if line.is_empty() {
                continue;
            }
        }

        let Some(case) = current.as_mut() else {
            segmentation.unattributed_lines += 1;
            continue;
        };

        if let Some(caps) = FIELD_LABEL.captures(line) {
            let field = CaseField::from_label(&caps[1]);
            let value = caps[2].trim();
            if !value.is_empty() {
                field.slot(case).push(value.to_string());
            }
            continue;
        }

        match CaseField::ORDER
            .into_iter()
            .find(|field| field.slot(case).is_empty())
        {
            Some(field) => field.slot(case).push(line.to_string()),
            None => segmentation.unattributed_lines += 1,
        }
    }

    flush(current, &mut segmentation);
    segmentation
}

fn flush(case: Option<PastCase>, segmentation: &mut CaseSegmentation) {
    if let Some(case) = case {
        if !case.date.is_empty() && !case.diagnosis.is_empty() {
            segmentation.cases.push(case);
        } else {
            segmentation.incomplete_records += 1;
        }
    }
}
