//! zone-sweeper 入口
//!
//! 流程：参数解析 → 汇总名称/令牌 → 拉取 → 过滤 → 确认 → 删除。
//!
//! 退出码：
//! - 0 — 正常结束或用户中止
//! - 1 — 拉取阶段失败（删除阶段的单条失败不影响退出码）
//! - 2 — 参数错误（clap 冲突、缺少令牌、名称文件不可读）

mod cli;
mod confirm;
mod delete;
mod names;

use std::env;
use std::process::ExitCode;

use clap::Parser;
use zone_sweeper_client::{CloudflareClient, FilterCriteria, filter_records};

use cli::Cli;

const TOKEN_ENV_VAR: &str = "CLOUDFLARE_API_TOKEN";

/// Usage 错误的退出码，与 clap 自身保持一致
const EXIT_USAGE: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    run(Cli::parse()).await
}

async fn run(cli: Cli) -> ExitCode {
    let Cli {
        token,
        zone_id,
        mut names,
        names_file,
        contains,
        record_type,
        dry_run,
        yes,
    } = cli;

    // --name 与 --names-file 互斥由 clap 保证，这里只需要合并
    if let Some(path) = &names_file {
        match names::load_names_from_file(path) {
            Ok(loaded) => names.extend(loaded),
            Err(e) => {
                eprintln!("Failed to read names file '{}': {e}", path.display());
                return ExitCode::from(EXIT_USAGE);
            }
        }
    }

    let token = match resolve_token(token) {
        Some(token) => token,
        None => {
            eprintln!(
                "Cloudflare API token not provided. Use --token or set {TOKEN_ENV_VAR}."
            );
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let client = CloudflareClient::new(token);

    let records = match client.fetch_all_records(&zone_id, record_type.as_deref()).await {
        Ok(records) => records,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("Fetched {} records from zone {zone_id}", records.len());

    let criteria = FilterCriteria {
        exact_names: names,
        contains,
    };
    let filtered = filter_records(records, &criteria);
    log::info!("{} records match the filters", filtered.len());

    if dry_run {
        // 只预览，不删除
        confirm::confirm(&filtered, true);
        return ExitCode::SUCCESS;
    }

    if !confirm::confirm(&filtered, yes) {
        println!("Aborted.");
        return ExitCode::SUCCESS;
    }

    let summary = delete::delete_records(&client, &zone_id, &filtered).await;
    log::info!(
        "Deletion finished: {} deleted, {} failed, {} skipped",
        summary.deleted,
        summary.failed,
        summary.skipped
    );

    ExitCode::SUCCESS
}

/// 令牌优先取 `--token`，否则回退到环境变量；空串视为未提供
fn resolve_token(flag: Option<String>) -> Option<String> {
    flag.filter(|t| !t.is_empty())
        .or_else(|| env::var(TOKEN_ENV_VAR).ok().filter(|t| !t.is_empty()))
}
