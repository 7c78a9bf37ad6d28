//! Compiled-in catalog table

use super::definition::{Category, Tool};

/// (id, name, icon)
const CATEGORIES: &[(&str, &str, &str)] = &[
    ("text", "文本工具", "Document"),
    ("encode", "编码转换", "Switch"),
    ("image", "图片工具", "Picture"),
    ("code", "代码工具", "EditPen"),
    ("datetime", "时间日期", "Clock"),
    ("generator", "生成器", "MagicStick"),
    ("crypto", "加密解密", "Lock"),
    ("color", "颜色工具", "Brush"),
    ("network", "网络工具", "Connection"),
];

struct Entry {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    icon: &'static str,
    category: &'static str,
    keywords: &'static [&'static str],
}

// Keyword tags are matched verbatim, so they are authored lower-case.
const TOOLS: &[Entry] = &[
    Entry {
        id: "json-formatter",
        name: "JSON 格式化",
        description: "JSON 美化、压缩、校验",
        icon: "Document",
        category: "text",
        keywords: &["json", "格式化", "美化", "压缩", "校验"],
    },
    Entry {
        id: "text-diff",
        name: "文本对比",
        description: "对比两段文本的差异",
        icon: "DocumentCopy",
        category: "text",
        keywords: &["文本", "对比", "diff", "差异"],
    },
    Entry {
        id: "text-counter",
        name: "字数统计",
        description: "统计字符、单词、行数",
        icon: "DataLine",
        category: "text",
        keywords: &["字数", "统计", "字符", "单词"],
    },
    Entry {
        id: "case-converter",
        name: "大小写转换",
        description: "各种大小写格式转换",
        icon: "Sort",
        category: "text",
        keywords: &["大小写", "转换", "camel", "snake"],
    },
    Entry {
        id: "base64",
        name: "Base64 编解码",
        description: "文本与 Base64 互转",
        icon: "Switch",
        category: "encode",
        keywords: &["base64", "编码", "解码"],
    },
    Entry {
        id: "url-encode",
        name: "URL 编解码",
        description: "URL 编码与解码",
        icon: "Link",
        category: "encode",
        keywords: &["url", "编码", "解码", "encode"],
    },
    Entry {
        id: "unicode",
        name: "Unicode 转换",
        description: "Unicode 与中文互转",
        icon: "Collection",
        category: "encode",
        keywords: &["unicode", "中文", "转换"],
    },
    Entry {
        id: "html-entity",
        name: "HTML 实体转换",
        description: "HTML 实体编解码",
        icon: "Promotion",
        category: "encode",
        keywords: &["html", "实体", "转义"],
    },
    Entry {
        id: "qrcode-generator",
        name: "二维码生成",
        description: "文本生成二维码图片",
        icon: "Grid",
        category: "image",
        keywords: &["二维码", "qrcode", "生成"],
    },
    Entry {
        id: "image-base64",
        name: "图片 Base64 转换",
        description: "图片与 Base64 互转",
        icon: "PictureFilled",
        category: "image",
        keywords: &["图片", "base64", "转换"],
    },
    Entry {
        id: "image-compress",
        name: "图片压缩",
        description: "在线压缩图片体积",
        icon: "FolderChecked",
        category: "image",
        keywords: &["图片", "压缩", "compress"],
    },
    Entry {
        id: "code-formatter",
        name: "代码格式化",
        description: "JS/CSS/HTML/SQL 格式化",
        icon: "Tickets",
        category: "code",
        keywords: &["代码", "格式化", "js", "css", "html"],
    },
    Entry {
        id: "regex-tester",
        name: "正则测试",
        description: "正则表达式在线测试",
        icon: "Search",
        category: "code",
        keywords: &["正则", "regex", "测试", "匹配"],
    },
    Entry {
        id: "markdown-preview",
        name: "Markdown 预览",
        description: "Markdown 实时预览",
        icon: "DocumentChecked",
        category: "code",
        keywords: &["markdown", "md", "预览"],
    },
    Entry {
        id: "timestamp",
        name: "时间戳转换",
        description: "时间戳与日期互转",
        icon: "Timer",
        category: "datetime",
        keywords: &["时间戳", "timestamp", "日期", "转换"],
    },
    Entry {
        id: "date-calculator",
        name: "日期计算",
        description: "日期差值与推算",
        icon: "Calendar",
        category: "datetime",
        keywords: &["日期", "计算", "差值"],
    },
    Entry {
        id: "uuid-generator",
        name: "UUID 生成",
        description: "生成 UUID v4",
        icon: "Key",
        category: "generator",
        keywords: &["uuid", "生成", "guid"],
    },
    Entry {
        id: "password-generator",
        name: "随机密码生成",
        description: "生成安全随机密码",
        icon: "Lock",
        category: "generator",
        keywords: &["密码", "随机", "生成", "password"],
    },
    Entry {
        id: "number-converter",
        name: "进制转换",
        description: "2/8/10/16 进制互转",
        icon: "Operation",
        category: "generator",
        keywords: &["进制", "转换", "二进制", "十六进制"],
    },
    Entry {
        id: "hash-generator",
        name: "Hash 生成",
        description: "MD5/SHA1/SHA256 生成",
        icon: "CircleCheck",
        category: "crypto",
        keywords: &["hash", "md5", "sha", "加密"],
    },
    Entry {
        id: "jwt-decoder",
        name: "JWT 解析",
        description: "解析 JWT Token",
        icon: "Postcard",
        category: "crypto",
        keywords: &["jwt", "token", "解析"],
    },
    Entry {
        id: "color-converter",
        name: "颜色转换",
        description: "HEX/RGB/HSL 互转",
        icon: "Brush",
        category: "color",
        keywords: &["颜色", "hex", "rgb", "hsl"],
    },
    Entry {
        id: "gradient-generator",
        name: "渐变生成器",
        description: "CSS 渐变色生成",
        icon: "Sunny",
        category: "color",
        keywords: &["渐变", "gradient", "css"],
    },
    Entry {
        id: "ip-lookup",
        name: "IP 地址查询",
        description: "查询 IP 地址及地理位置信息",
        icon: "Position",
        category: "network",
        keywords: &["ip", "地址", "查询", "位置", "网络"],
    },
    Entry {
        id: "browser-info",
        name: "浏览器信息",
        description: "获取浏览器和设备详细信息",
        icon: "Monitor",
        category: "network",
        keywords: &["浏览器", "设备", "信息", "browser"],
    },
    Entry {
        id: "url-parser",
        name: "URL 解析",
        description: "解析 URL 地址的各个组成部分",
        icon: "Link",
        category: "network",
        keywords: &["url", "解析", "地址", "链接"],
    },
    Entry {
        id: "useragent-parser",
        name: "UserAgent 分析",
        description: "解析 UserAgent 识别浏览器和系统",
        icon: "Cpu",
        category: "network",
        keywords: &["useragent", "ua", "浏览器", "分析"],
    },
    Entry {
        id: "subnet-calculator",
        name: "子网掩码计算",
        description: "计算 IP 子网信息和可用主机范围",
        icon: "Connection",
        category: "network",
        keywords: &["子网", "掩码", "cidr", "ip", "计算"],
    },
];

pub(super) fn categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|(id, name, icon)| Category::new(*id, *name, *icon))
        .collect()
}

pub(super) fn tools() -> Vec<Tool> {
    TOOLS
        .iter()
        .map(|e| {
            Tool::new(e.id, e.name, e.description, e.category)
                .with_icon(e.icon)
                .with_keywords(e.keywords.iter().copied())
        })
        .collect()
}
