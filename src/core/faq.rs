pub const GREETING: &str = "Hi! I'm your WealthWhiz Assistant. How can I help you today?";

pub const FALLBACK_REPLY: &str = "I'm not sure about that. Try asking about investments, retirement planning, or website navigation.";

// A later keyword found in the query overrides an earlier one.
const FAQ_ENTRIES: &[(&str, &str)] = &[
    ("hello", "Hello! I'm WealthWhiz Assistant. How can I help you today?"),
    ("hi", "Hi there! How can I assist you with your financial planning?"),
    (
        "help",
        "I can help you navigate the website, explain financial terms, or answer frequently asked questions about investing and financial planning.",
    ),
    (
        "dashboard",
        "The Dashboard shows your financial overview. You can access it from the main navigation menu.",
    ),
    (
        "calculator",
        "Our financial calculators can help you plan for retirement, calculate loan payments, and more. Access them from the 'Calculator' section in the main menu.",
    ),
    (
        "resources",
        "Our Resources section includes guides, regulations, and financial news to help you make informed decisions.",
    ),
    (
        "invest",
        "There are many investment options including stocks, bonds, mutual funds, and real estate. Check our 'Resources' section for detailed investment guides.",
    ),
    (
        "stocks",
        "Stocks represent ownership in a company. When you buy a stock, you're buying a small piece of that company.",
    ),
    (
        "bonds",
        "Bonds are loans investors make to corporations or governments. They typically provide fixed income through regular interest payments.",
    ),
    (
        "mutual funds",
        "Mutual funds pool money from many investors to purchase a diversified portfolio of stocks, bonds, or other securities.",
    ),
    (
        "sip",
        "Systematic Investment Plan (SIP) is a method to invest a fixed amount in mutual funds at regular intervals, benefiting from rupee cost averaging.",
    ),
    (
        "retirement",
        "Retirement planning should start early. Use our calculators to determine how much you need to save and explore various retirement investment options in our guides.",
    ),
    (
        "tax",
        "For tax-related information, check our 'Regulations' tab in the Resources section for the latest updates on tax laws and strategies.",
    ),
    (
        "market",
        "For the latest market updates, visit our 'Indian News' section under Resources.",
    ),
];

pub const SUGGESTIONS: [&str; 5] = [
    "What is SIP?",
    "Help me understand stocks",
    "How to plan for retirement?",
    "Where can I find investment guides?",
    "Latest tax regulations",
];

/// Matches on plain substrings, so "hi" also fires inside words like "this".
pub fn answer(query: &str) -> &'static str {
    let normalized = query.trim().to_lowercase();
    FAQ_ENTRIES
        .iter()
        .rev()
        .find(|(keyword, _)| normalized.contains(keyword))
        .map(|&(_, reply)| reply)
        .unwrap_or(FALLBACK_REPLY)
}
