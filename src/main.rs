use std::path::PathBuf;

use clap::Parser;
use agro_valorization_dashboard::{app, config, i18n};

/// 슬라이더 없이 시나리오를 평가하고 차트 PNG를 내보낸다.
#[derive(Debug, Parser)]
#[command(name = "agro_valorization_dashboard_cli", version, about)]
struct Args {
    /// 연간 생산량 [kg/년] (1000-20000)
    #[arg(long)]
    volume: Option<f64>,
    /// 대체 계수 [kg/kg] (0.1-1.0)
    #[arg(long)]
    factor: Option<f64>,
    /// 2차 원료 비율 [%] (40-70)
    #[arg(long)]
    percentage: Option<f64>,
    /// 판매 단가 [통화/kg] (2000-10000)
    #[arg(long)]
    price: Option<f64>,
    /// 네 값을 표준입력으로 묻는다 (값 플래그와 함께 쓸 수 없다)
    #[arg(short, long, conflicts_with_all = ["volume", "factor", "percentage", "price"])]
    interactive: bool,
    /// 세 차트를 PNG로 저장할 디렉터리
    #[arg(long, value_name = "DIR")]
    export_dir: Option<PathBuf>,
    /// 로고 주소를 실제로 요청해 결과를 출력한다
    #[arg(long)]
    check_logos: bool,
    /// 언어 (auto/en/es)
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,
    /// 디버그 로그 출력
    #[arg(short, long)]
    verbose: bool,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();
    let lang = args.lang.clone();
    if let Err(err) = try_run(args) {
        let tr = i18n::Translator::new(&i18n::resolve_language(&lang, None));
        eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}

fn try_run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&args.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    let opts = app::CliOptions {
        production: args.volume,
        substitution: args.factor,
        secondary_pct: args.percentage,
        unit_price: args.price,
        interactive: args.interactive,
        export_dir: args.export_dir,
        check_logos: args.check_logos,
    };
    app::run(&cfg, &tr, &opts)?;
    Ok(())
}
