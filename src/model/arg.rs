use clap::Parser;

/// 文本处理 API 服务
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<String>,

    /// 强制开启 Mock 模式（不访问上游 API）
    #[arg(long)]
    pub mock: bool,
}
