//! Built-in string tables.
//!
//! Every built-in locale carries the same key set. Sites add their own keys
//! (typically `paths.<segment>` folder titles) through configuration.

use std::collections::HashMap;

const EN: &[(&str, &str)] = &[
    ("site.title", "FuniqLab"),
    ("site.desc", "Fun and unique"),
    ("light", "Light"),
    ("dark", "Dark"),
    ("system", "System"),
    ("toggle_theme", "Toggle theme"),
    ("search", "Search"),
    ("no_results_found", "No results found."),
    ("nav.home", "Home"),
    ("nav.projects", "Projects"),
    ("nav.about", "About"),
    ("hero.title", "Explore the Fun"),
    ("hero.title.highlight", "Create the Unique"),
    ("hero.description", "Discover fun moments in life"),
    ("hero.description.extra", "Become your unique self"),
    ("a11y.languagePicker", "Select language"),
    ("404.title", "Page not found"),
    (
        "404.description",
        "The page you're looking for might have been moved or deleted.",
    ),
    ("404.cta", "Back to homepage"),
    ("footer.builtBy", "Built by"),
    ("footer.sourceCode", "The source code is available on"),
];

const ZH: &[(&str, &str)] = &[
    ("site.title", "FuniqLab"),
    ("site.desc", "有趣且独特"),
    ("light", "浅色"),
    ("dark", "深色"),
    ("system", "系统"),
    ("toggle_theme", "切换主题"),
    ("search", "搜索"),
    ("no_results_found", "未找到结果。"),
    ("nav.home", "首页"),
    ("nav.projects", "项目"),
    ("nav.about", "关于"),
    ("hero.title", "探索有趣"),
    ("hero.title.highlight", "创造独特"),
    ("hero.description", "发现生活中的有趣瞬间"),
    ("hero.description.extra", "成为独一无二的自己"),
    ("a11y.languagePicker", "选择语言"),
    ("404.title", "页面未找到"),
    ("404.description", "您访问的页面可能已被移动或删除。"),
    ("404.cta", "返回首页"),
    ("footer.builtBy", "构建者"),
    ("footer.sourceCode", "源代码托管于"),
];

/// Built-in table for a locale key, if one ships with the crate.
pub(crate) fn builtin(key: &str) -> Option<HashMap<String, String>> {
    let table = match key {
        "en" => EN,
        "zh" => ZH,
        _ => return None,
    };
    Some(
        table
            .iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .collect(),
    )
}
