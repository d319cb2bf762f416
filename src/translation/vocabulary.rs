/*!
 * Built-in heading and title vocabularies.
 */

use super::table::SubstitutionTable;

// "## Examples" must stay ahead of "## Example".
const ZH_CN_CONTENT: &[(&str, &str)] = &[
    ("## Instance properties", "## 实例属性"),
    ("## Instance methods", "## 实例方法"),
    ("## Events", "## 事件"),
    ("## Syntax", "## 语法"),
    ("### Parameters", "### 参数"),
    ("### Return value", "### 返回值"),
    ("### Exceptions", "### 异常"),
    ("## Value", "## 值"),
    ("## Event type", "## 事件类型"),
    ("## Examples", "## 示例"),
    ("## Example", "## 示例"),
    ("#### Result", "#### 结果"),
    ("### Results", "#### 结果"),
    ("## Specifications", "## 规范"),
    ("## Browser compatibility", "## 浏览器兼容性"),
    ("## See also", "## 参见"),
];

// Quotes are stripped before any word is mapped.
const ZH_CN_TITLE: &[(&str, &str)] = &[
    ("\"", ""),
    (": ", "："),
    ("property", "属性"),
    ("method", "方法"),
    ("event", "事件"),
];

/// Body and title tables used for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    content: SubstitutionTable,
    title: SubstitutionTable,
}

impl Vocabulary {
    pub fn new(content: SubstitutionTable, title: SubstitutionTable) -> Self {
        Self { content, title }
    }

    /// Built-in tables for `target_locale`, without the locale path rule.
    ///
    /// Returns `None` when no vocabulary ships for that locale.
    pub fn builtin(target_locale: &str) -> Option<Self> {
        match target_locale.to_ascii_lowercase().as_str() {
            "zh-cn" => Some(Self::new(
                SubstitutionTable::from_pairs(ZH_CN_CONTENT.iter().copied()),
                SubstitutionTable::from_pairs(ZH_CN_TITLE.iter().copied()),
            )),
            _ => None,
        }
    }

    /// Append the rule rewriting `/<source>/` path segments to `/<target>/`.
    ///
    /// The rule runs after every heading pair.
    pub fn with_locale_rule(mut self, source_locale: &str, target_locale: &str) -> Self {
        self.content
            .push(format!("/{}/", source_locale), format!("/{}/", target_locale));
        self
    }

    pub fn content_table(&self) -> &SubstitutionTable {
        &self.content
    }

    pub fn title_table(&self) -> &SubstitutionTable {
        &self.title
    }

    /// Apply the body table
    pub fn translate_body(&self, body: &str) -> String {
        self.content.apply(body)
    }

    /// Apply the title table
    pub fn translate_title(&self, title: &str) -> String {
        self.title.apply(title)
    }
}
