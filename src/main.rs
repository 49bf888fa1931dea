//! GPU 靓号地址搜索 - 评分条件编译器
//!
//! 使用方式:
//!   cargo run -- --leading a
//!   cargo run -- --matching dead --contract
//!   cargo run -- --tron TVanity
//!   cargo run -- --leading-range --min 0 --max 3

use clap::{CommandFactory, Parser};
use log::info;

use rust_profanity_criteria::{
    CompiledCriteria, CriteriaRequest, KeyMaterial, RuleSelectors, Target, compile,
};

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "rust-profanity-criteria")]
#[command(about = "GPU 靓号地址搜索评分条件编译器")]
#[command(version = "0.1.0")]
struct Args {
    /// 测速模式，不做任何约束
    #[arg(long)]
    benchmark: bool,

    /// 前导零
    #[arg(long)]
    zeros: bool,

    /// 前导字符为字母 a-f
    #[arg(long)]
    letters: bool,

    /// 前导字符为数字 0-9
    #[arg(long)]
    numbers: bool,

    /// 前导字符 (单个十六进制字符)
    #[arg(long)]
    leading: Option<String>,

    /// 十六进制前缀匹配，如 dead
    #[arg(long)]
    matching: Option<String>,

    /// 前导字符落在 [min, max] 范围内
    #[arg(long)]
    leading_range: bool,

    /// 前导数值落在 [min, max] 范围内
    #[arg(long)]
    range: bool,

    /// 回文地址
    #[arg(long)]
    mirror: bool,

    /// 重复的前导字符
    #[arg(long)]
    leading_doubles: bool,

    /// 范围下界
    #[arg(short = 'm', long, default_value = "0")]
    min: u8,

    /// 范围上界
    #[arg(short = 'M', long, default_value = "0")]
    max: u8,

    /// 搜索合约地址而不是普通地址
    #[arg(short, long, default_value_t = false)]
    contract: bool,

    /// Gas 优化地址
    #[arg(short, long)]
    gas: bool,

    /// TRON Base58 地址前缀，如 TVanity
    #[arg(short = 'T', long)]
    tron: Option<String>,

    /// 公钥 (128 个十六进制字符) 或初始种子 (64 个)
    #[arg(short = 'z', long)]
    public_key: Option<String>,
}

impl Args {
    fn selectors(&self) -> RuleSelectors {
        RuleSelectors {
            benchmark: self.benchmark,
            zeros: self.zeros,
            gas: self.gas,
            letters: self.letters,
            numbers: self.numbers,
            leading: self.leading.clone(),
            matching: self.matching.clone(),
            tron: self.tron.clone(),
            leading_range: self.leading_range,
            range: self.range,
            mirror: self.mirror,
            doubles: self.leading_doubles,
            min: self.min,
            max: self.max,
        }
    }

    fn target(&self) -> Target {
        if self.contract {
            Target::Contract
        } else {
            Target::Address
        }
    }
}

fn print_compiled(compiled: &CompiledCriteria) {
    let criteria = &compiled.criteria;

    println!();
    println!("========================================");
    println!("规则: {}", criteria.name());
    println!("评分内核: {}", criteria.kernel());
    println!("目标: {}", criteria.target().transform_name());
    if let Some(transform) = criteria.target().transform_kernel() {
        println!("变换内核: {}", transform);
    }
    println!("边界 A: {}", hex::encode(criteria.bound_a()));
    println!("边界 B: {}", hex::encode(criteria.bound_b()));
    println!("参数块: {}", hex::encode(criteria.payload().to_bytes()));

    match &compiled.key {
        Some(KeyMaterial::PublicKey { x, y }) => {
            println!("公钥 X: {}", hex::encode(x.to_be_bytes()));
            println!("公钥 Y: {}", hex::encode(y.to_be_bytes()));
        }
        Some(KeyMaterial::InitSeed(seed)) => {
            println!("初始种子: {}", hex::encode(seed.to_be_bytes()));
        }
        None => {}
    }
    println!("========================================");
}

/// 主函数
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    info!("参数: {:?}", args);

    let Some(rule) = args.selectors().select() else {
        Args::command().print_help()?;
        return Ok(());
    };

    let mut request = CriteriaRequest::new(rule);
    request.target = args.target();
    request.key = args.public_key.clone();

    let compiled = compile(&request)?;
    print_compiled(&compiled);

    Ok(())
}
