use super::domain::{Criterion, Shoe, ShoeEvaluation};

/// Minimum criterion score that earns a line in the explanation.
pub(crate) const EXPLANATION_THRESHOLD: f64 = 8.0;

pub(crate) const BALANCED_EXPLANATION: &str = "This shoe is well balanced across all criteria";

pub(crate) fn explain(evaluation: &ShoeEvaluation) -> Vec<String> {
    let mut explanations: Vec<String> = Criterion::ALL
        .iter()
        .filter(|criterion| evaluation.scores.get(**criterion) >= EXPLANATION_THRESHOLD)
        .map(|criterion| describe(*criterion, &evaluation.shoe))
        .collect();

    if explanations.is_empty() {
        explanations.push(BALANCED_EXPLANATION.to_string());
    }

    explanations
}

fn describe(criterion: Criterion, shoe: &Shoe) -> String {
    match criterion {
        Criterion::Color => format!("Color {} matches your preferences", shoe.color),
        Criterion::Material => format!("{} material is high quality", shoe.material),
        Criterion::Price => format!("Price {} fits your budget", format_rupiah(shoe.price)),
        Criterion::Brand => format!("{} has a strong reputation", shoe.brand),
        Criterion::Occasion => format!("Suitable for {} occasions", shoe.occasion),
    }
}

/// Formats a whole-rupiah amount with thousands separators, e.g. `Rp 1,299,000`.
pub fn format_rupiah(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if amount < 0 {
        format!("Rp -{grouped}")
    } else {
        format!("Rp {grouped}")
    }
}
