use clap::{Args, Parser, Subcommand};
use job_board_common::{FilterSelection, Schema, SortMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "job-board")]
#[command(about = "求人JSONの絞り込み・並び替えビューア", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSONのキー体系 (auto/relative/dated)。省略時は設定ファイルの値
    #[arg(long, global = true)]
    pub schema: Option<Schema>,
}

/// フィルタと並び替えの指定
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// レベルで絞り込み（完全一致）
    #[arg(long)]
    pub level: Option<String>,

    /// 雇用形態で絞り込み（完全一致）
    #[arg(long = "type")]
    pub kind: Option<String>,

    /// スキルで絞り込み（完全一致）
    #[arg(long)]
    pub skill: Option<String>,

    /// 並び替え (title-asc/title-desc/time-oldest/time-newest)
    #[arg(long)]
    pub sort: Option<SortMode>,
}

impl ViewArgs {
    pub fn selection(&self) -> FilterSelection {
        FilterSelection::new(self.level.clone(), self.kind.clone(), self.skill.clone())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// 求人一覧を表示
    List {
        /// 求人JSONファイル
        #[arg(required = true)]
        file: PathBuf,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// 一覧のN番目の求人の詳細を表示
    Show {
        /// 求人JSONファイル
        #[arg(required = true)]
        file: PathBuf,

        /// 一覧での番号（1始まり）
        #[arg(required = true)]
        number: usize,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// フィルタ選択肢を表示
    Options {
        /// 求人JSONファイル
        #[arg(required = true)]
        file: PathBuf,
    },

    /// 対話的に絞り込み・並び替え・詳細表示
    Browse {
        /// 最初に読み込む求人JSONファイル
        file: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 既定の並び替えを設定
        #[arg(long)]
        set_default_sort: Option<SortMode>,

        /// 既定のキー体系を設定
        #[arg(long)]
        set_schema: Option<Schema>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_with_filters() {
        let cli = Cli::try_parse_from([
            "job-board", "list", "jobs.json", "--level", "Senior", "--type", "Contract",
            "--sort", "time-oldest",
        ])
        .unwrap();
        match cli.command {
            Commands::List { file, view } => {
                assert_eq!(file, PathBuf::from("jobs.json"));
                assert_eq!(view.level.as_deref(), Some("Senior"));
                assert_eq!(view.kind.as_deref(), Some("Contract"));
                assert_eq!(view.sort, Some(SortMode::TimeOldest));
                assert_eq!(view.selection().skill, None);
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_parse_show_and_global_schema() {
        let cli = Cli::try_parse_from(["job-board", "show", "jobs.json", "2", "--schema", "dated"])
            .unwrap();
        assert_eq!(cli.schema, Some(Schema::Dated));
        assert!(matches!(cli.command, Commands::Show { number: 2, .. }));
    }

    #[test]
    fn test_unknown_sort_token_is_unsorted() {
        let cli = Cli::try_parse_from(["job-board", "list", "jobs.json", "--sort", "random"])
            .unwrap();
        match cli.command {
            Commands::List { view, .. } => assert_eq!(view.sort, Some(SortMode::Unsorted)),
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_invalid_schema_rejected() {
        assert!(Cli::try_parse_from(["job-board", "options", "a.json", "--schema", "xml"]).is_err());
    }
}
