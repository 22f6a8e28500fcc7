use std::sync::OnceLock;

/// Industry tags the model may use for `{"action":"filter","field":"tag"}`.
pub const TAGS: &[&str] = &[
    "AI", "大数据", "光伏", "储能", "装备", "制造", "物流", "仓储", "基因", "医药", "新能源",
    "智能驾驶", "健康", "食品", "材料", "科技", "政务", "智慧城市", "环保", "工程", "量子", "通信",
    "农业", "航天", "卫星", "医疗", "教育", "海洋", "芯片", "半导体", "建筑",
];

/// Companies listed in the directory.
pub const COMPANIES: &[&str] = &[
    "星辰科技", "绿源新能源", "宏达制造", "云链物流", "未来生物", "智行汽车", "蓝海食品",
    "天工材料", "数智政务", "长江环保", "量子通信", "金禾农业", "星际航空", "云图医疗",
    "东方文旅", "极光电池", "智教未来", "深蓝海洋", "芯火半导体", "绿色建筑",
];

const PROMPT_TEMPLATE: &str = r#"
你是一个招商引资平台的操作助手。请根据用户输入，返回一个 **纯 JSON 对象**，不要任何解释、Markdown 或额外文本。

支持的操作类型：

1. 显示全部公司 → {"action": "show_all"}
2. 按员工人数筛选（大于等于）→ {"action": "filter", "field": "staff_gte", "value": 1000}
3. 按标签（行业关键词）筛选 → {"action": "filter", "field": "tag", "value": "新能源"}
4. 按公司名称查看 → {"action": "show_company", "company_name": "星辰科技"}
5. 下载某公司报告 → {"action": "download_report", "company_name": "星辰科技"}

标签必须是以下之一（严格匹配）：
{tags}

规则：
1. 公司名称必须从以下列表中精确匹配（允许模糊但优先精确）：
   {companies}
2. 如果用户说“查看XX”、“打开XX详情”、“XX公司信息”，返回 show_company
3. 如果用户说“下载XX报告”、“导出XX招商资料”，返回 download_report
4. 只返回合法 JSON，无法理解时返回 {"action": "unknown"}
"#;

/// Companies per line in the prompt's company list.
const COMPANIES_PER_LINE: usize = 10;

/// System message steering the model to answer with a bare action object.
/// Built once from [`TAGS`] and [`COMPANIES`].
pub fn system_prompt() -> &'static str {
    static PROMPT: OnceLock<String> = OnceLock::new();
    PROMPT.get_or_init(|| {
        let companies = COMPANIES
            .chunks(COMPANIES_PER_LINE)
            .map(|line| line.join(", "))
            .collect::<Vec<_>>()
            .join(",\n   ");
        PROMPT_TEMPLATE
            .replace("{tags}", &TAGS.join(", "))
            .replace("{companies}", &companies)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_lists_every_tag_and_company() {
        let prompt = system_prompt();
        assert!(prompt.contains(&TAGS.join(", ")));

        for company in COMPANIES {
            assert!(prompt.contains(company), "missing company {company}");
        }
        assert!(!prompt.contains("{tags}"));
        assert!(!prompt.contains("{companies}"));
    }

    #[test]
    fn prompt_names_every_action() {
        for action in ["show_all", "filter", "show_company", "download_report", "unknown"] {
            assert!(system_prompt().contains(&format!(r#""action": "{action}""#)));
        }
    }

    #[test]
    fn company_list_wraps_after_ten_names() {
        assert!(system_prompt().contains(
            "   星辰科技, 绿源新能源, 宏达制造, 云链物流, 未来生物, 智行汽车, 蓝海食品, 天工材料, 数智政务, 长江环保,\n   量子通信,"
        ));
    }
}
