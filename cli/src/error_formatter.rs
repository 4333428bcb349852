use ariadne::{Color, Label, Report, ReportKind, Source};
use mathler::{EvalError, EvalErrorKind};

/// Format an EvalError with fancy terminal output using Ariadne
pub fn format_eval_error(error: &EvalError) -> String {
    let Some(span) = error.span else {
        return format!("Error: {}", error);
    };

    let text = error.expression.as_str();
    let char_len = text.chars().count();
    if char_len == 0 {
        return format!("Error: {}", error);
    }

    // Spans are byte offsets; ariadne counts characters
    let start = char_offset(text, span.start).min(char_len - 1);
    let end = char_offset(text, span.end).max(start + 1).min(char_len);

    let source_id = "expression".to_string();
    let mut output = Vec::new();

    let mut report = Report::build(ReportKind::Error, &source_id, start)
        .with_message(format!("Uncomputable: {}", error.message()))
        .with_label(
            Label::new((&source_id, start..end))
                .with_message(label_for(&error.kind))
                .with_color(Color::Red),
        );

    if let Some(help) = help_for(&error.kind) {
        report = report.with_help(help);
    }

    match report
        .finish()
        .write((&source_id, Source::from(text)), &mut output)
    {
        Ok(_) => String::from_utf8_lossy(&output).to_string(),
        Err(_) => format!("Error: {}", error),
    }
}

fn char_offset(text: &str, byte_offset: usize) -> usize {
    text.char_indices()
        .take_while(|(i, _)| *i < byte_offset)
        .count()
}

fn label_for(kind: &EvalErrorKind) -> &'static str {
    match kind {
        EvalErrorKind::InvalidCharacter(_) => "not allowed here",
        EvalErrorKind::Syntax(_) => "here",
        EvalErrorKind::DivisionByZero => "divides by zero",
        EvalErrorKind::Overflow => "too large",
        EvalErrorKind::Empty | EvalErrorKind::TooLong { .. } => "",
    }
}

fn help_for(kind: &EvalErrorKind) -> Option<&'static str> {
    match kind {
        EvalErrorKind::InvalidCharacter(_) => {
            Some("only digits, + - * / and × are allowed; parentheses are not supported")
        }
        EvalErrorKind::Syntax(_) => Some("numbers and operators must alternate, e.g. 12-2*1+0"),
        _ => None,
    }
}
