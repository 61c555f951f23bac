//! テキスト描画
//!
//! 一覧・詳細・フィルタ選択肢・エラー表示欄を文字列に整形する。

use job_board_common::{FilterField, FilterOptions, Job, ALL_OPTION};

/// 一覧の1行: `タイトル - 掲載時刻`
pub fn list_line(job: &Job) -> String {
    format!("{} - {}", job.title, job.posted)
}

/// 番号付き一覧（番号は1始まり）
pub fn render_list(jobs: &[Job], view: &[usize]) -> String {
    if view.is_empty() {
        return "(該当する求人はありません)\n".to_string();
    }

    let width = view.len().to_string().len();
    let mut out = String::new();
    for (n, &index) in view.iter().enumerate() {
        if let Some(job) = jobs.get(index) {
            out.push_str(&format!("{:>width$}) {}\n", n + 1, list_line(job), width = width));
        }
    }
    out
}

/// ラベル付きの詳細ブロック
pub fn render_detail(job: &Job) -> String {
    let fields = job.detail_fields();
    let label_width = fields.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    fields
        .iter()
        .map(|(label, value)| format!("{:<w$} : {}\n", label, value, w = label_width))
        .collect()
}

/// フィルタごとの選択肢（先頭は常に "All"）
pub fn render_options(options: &FilterOptions) -> String {
    let mut out = String::new();
    for field in FilterField::ALL {
        let mut values = vec![ALL_OPTION.to_string()];
        values.extend(options.values(field).iter().cloned());
        out.push_str(&format!("{}: {}\n", field, values.join(", ")));
    }
    out
}

pub fn render_error(message: &str) -> String {
    format!("✖ {}", message)
}
