use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::models::AggregateResult;
use crate::receipt::codes::DecorativeCodes;

pub const RECEIPT_WIDTH: usize = 40;

/// A rendered receipt: one aggregate result plus the decoration drawn for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    pub result: AggregateResult,
    pub codes: DecorativeCodes,
    pub issued_at: DateTime<FixedOffset>,
}

impl Receipt {
    pub fn new(result: AggregateResult, codes: DecorativeCodes, issued_at: DateTime<FixedOffset>) -> Self {
        Self {
            result,
            codes,
            issued_at,
        }
    }

    pub fn format_text(&self) -> String {
        let r = &self.result;
        let profile = &r.profile;
        let rule = "-".repeat(RECEIPT_WIDTH);
        let mut lines: Vec<String> = Vec::new();

        lines.push(center("GITHUB RECEIPT"));
        lines.push(center(&self.issued_at.format("%A, %B %d, %Y").to_string().to_uppercase()));
        lines.push(center(&format!("ORDER #{}", self.codes.order_number)));
        lines.push(String::new());

        lines.push(format!("CUSTOMER: {}", profile.display_name()));
        lines.push(format!("@{}", profile.login));
        lines.push(rule.clone());

        lines.push(row("REPOSITORIES", &profile.public_repos.to_string()));
        lines.push(row("STARS EARNED", &r.total_stars.to_string()));
        lines.push(row("REPO FORKS", &r.total_forks.to_string()));
        lines.push(row("FOLLOWERS", &profile.followers.to_string()));
        lines.push(row("FOLLOWING", &profile.following.to_string()));
        lines.push(rule.clone());

        lines.push("LANGUAGES:".to_string());
        lines.extend(wrap(&r.language_list(), RECEIPT_WIDTH));
        lines.push(String::new());

        lines.push(row("MOST ACTIVE DAY:", &r.most_active_day));
        lines.push(row("COMMITS (30d):", &r.commit_count.to_string()));
        lines.push(row("CONTRIBUTION SCORE:", &r.contribution_score.to_string()));
        lines.push(String::new());

        lines.push(center("Served by: GitHub Bot"));
        lines.push(center(&self.issued_at.format("%I:%M:%S %p").to_string()));
        lines.push(String::new());

        lines.push(center(&format!("COUPON CODE: {}", self.codes.coupon_code)));
        lines.push(center("Save for your next commit!"));
        lines.push(String::new());

        lines.push("CARD #: **** **** **** 2024".to_string());
        lines.push(format!("AUTH CODE: {}", self.codes.auth_code));
        lines.push(format!("CARDHOLDER: {}", profile.display_name().to_uppercase()));
        lines.push(String::new());

        lines.push(center("THANK YOU FOR CODING!"));
        lines.push(rule);
        lines.push(center(&format!("github.com/{}", profile.login)));

        let mut output = lines.join("\n");
        output.push('\n');
        output
    }

    pub fn format_markdown(&self) -> String {
        let r = &self.result;
        let profile = &r.profile;
        let mut output = String::new();

        output.push_str("# GitHub Receipt\n\n");
        output.push_str(&format!(
            "*{}* · Order #{}\n\n",
            self.issued_at.format("%A, %B %d, %Y"),
            self.codes.order_number
        ));
        output.push_str(&format!(
            "**Customer:** {} ([@{}](https://github.com/{}))\n\n",
            profile.display_name(),
            profile.login,
            profile.login
        ));

        output.push_str("| Item | Value |\n|------|-------|\n");
        output.push_str(&format!("| Repositories | {} |\n", profile.public_repos));
        output.push_str(&format!("| Stars Earned | {} |\n", r.total_stars));
        output.push_str(&format!("| Repo Forks | {} |\n", r.total_forks));
        output.push_str(&format!("| Followers | {} |\n", profile.followers));
        output.push_str(&format!("| Following | {} |\n", profile.following));
        output.push_str(&format!("| Languages | {} |\n", r.language_list()));
        output.push_str(&format!("| Most Active Day | {} |\n", r.most_active_day));
        output.push_str(&format!("| Commits (30d) | {} |\n", r.commit_count));
        output.push_str(&format!("| Contribution Score | {} |\n", r.contribution_score));

        output.push_str(&format!(
            "\nCoupon code: `{}` · Auth code: `{}`\n",
            self.codes.coupon_code, self.codes.auth_code
        ));
        output.push_str("\n---\n*Thank you for coding!*\n");

        output
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn center(text: &str) -> String {
    format!("{:^width$}", text, width = RECEIPT_WIDTH)
        .trim_end()
        .to_string()
}

/// Label on the left, value flush right.
fn row(label: &str, value: &str) -> String {
    let used = label.chars().count() + value.chars().count();
    let gap = RECEIPT_WIDTH.saturating_sub(used).max(1);
    format!("{}{}{}", label, " ".repeat(gap), value)
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
