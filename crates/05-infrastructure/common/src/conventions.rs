//! 命名约定规范
//!
//! 组件名称推导所用的大小写和后缀规则

/// 命名约定规范
#[derive(Debug)]
pub struct NamingConventions;

impl NamingConventions {
    /// 首字母小写
    ///
    /// 前两个字符都是大写时保持原样（`URLHandler` 不变），
    /// 避免把缩写拆成 `uRLHandler`。
    pub fn lower_camel(name: &str) -> String {
        let mut chars = name.chars();
        let Some(first) = chars.next() else {
            return String::new();
        };

        if let Some(second) = name.chars().nth(1) {
            if first.is_uppercase() && second.is_uppercase() {
                return name.to_string();
            }
        }

        first.to_lowercase().chain(chars).collect()
    }

    /// 将驼峰命名转换为蛇形命名
    pub fn to_snake_case(s: &str) -> String {
        let mut result = String::new();
        let mut chars = s.chars().peekable();
        let mut prev: Option<char> = None;

        while let Some(ch) = chars.next() {
            if ch.is_uppercase() && !result.is_empty() {
                let prev_is_lower = prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit());
                let next_is_lower = chars.peek().is_some_and(|next| next.is_lowercase());
                if prev_is_lower || next_is_lower {
                    result.push('_');
                }
            }
            result.extend(ch.to_lowercase());
            prev = Some(ch);
        }

        result
    }

    /// 去掉第一个匹配的后缀
    ///
    /// 去掉后缀后为空时返回原名称（`Command` 不会变成空串）。
    pub fn strip_suffix<'a>(name: &'a str, suffixes: &[String]) -> &'a str {
        suffixes
            .iter()
            .filter_map(|suffix| name.strip_suffix(suffix.as_str()))
            .find(|stripped| !stripped.is_empty())
            .unwrap_or(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_camel() {
        assert_eq!(NamingConventions::lower_camel("PingCommand"), "pingCommand");
        assert_eq!(NamingConventions::lower_camel("Ping"), "ping");
        assert_eq!(NamingConventions::lower_camel("URLHandler"), "URLHandler");
        assert_eq!(NamingConventions::lower_camel("x"), "x");
        assert_eq!(NamingConventions::lower_camel(""), "");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(NamingConventions::to_snake_case("PingCommand"), "ping_command");
        assert_eq!(NamingConventions::to_snake_case("PingV2Command"), "ping_v2_command");
        assert_eq!(NamingConventions::to_snake_case("URLHandler"), "url_handler");
        assert_eq!(NamingConventions::to_snake_case("echo"), "echo");
    }

    #[test]
    fn test_strip_suffix() {
        let suffixes = vec!["Command".to_string(), "Handler".to_string()];
        assert_eq!(NamingConventions::strip_suffix("PingCommand", &suffixes), "Ping");
        assert_eq!(NamingConventions::strip_suffix("LoginHandler", &suffixes), "Login");
        assert_eq!(NamingConventions::strip_suffix("Command", &suffixes), "Command");
        assert_eq!(NamingConventions::strip_suffix("Echo", &suffixes), "Echo");
    }
}
