// Prompt text for the experiment catalog.
// Every variant is "{base context}\n\n{condition clause}". Editing the wording here
// is how the experiment is adapted to a new domain.

/// Shared instruction for the player-level hypotheses (H1, H2, H4).
pub const PLAYER_BASE_CONTEXT: &str = "You are given season statistics for a team and its players. \
    Answer briefly in 3–4 sentences using only the statistics, without speculating or inventing data.";

/// Shared instruction for the team-level hypothesis (H3).
pub const TEAM_BASE_CONTEXT: &str = "You are given season-long team statistics: scoring margin, \
    turnovers, shooting percentages, rebounding, and opponent statistics.";

// H1 — primary scorer: inefficient vs developing

pub const H1_NEGATIVE: &str = "Player A has had issues with shot selection and often takes difficult attempts. \
    Based on their statistics, would you describe Player A as an inefficient high-usage scorer?";

pub const H1_POSITIVE: &str = "Player A carries a heavy offensive load and is developing as the primary scoring option. \
    Based on their statistics, how would you describe Player A’s development as a primary scorer?";

pub const H1_NEUTRAL: &str = "Using Player A’s minutes, scoring, and efficiency statistics only, \
    briefly describe their role and efficiency as a scorer.";

// H2 — Player B: defense vs spacing

pub const H2_DEFENSE_FOCUS: &str = "Focus only on defense- and rebounding-related statistics. \
    Based on those statistics, how strong is Player B’s defensive impact?";

pub const H2_OFFENSE_FOCUS: &str = "Focus only on shooting and offensive production statistics. \
    Based on those statistics, how valuable is Player B as an offensive or spacing option?";

pub const H2_BALANCED: &str = "Using both offensive and defensive statistics, \
    briefly describe Player B’s overall impact on the team.";

// H3 — team: turnovers (cause A) vs long-range shooting (cause B)

pub const H3_CAUSE_A_PRIMED: &str = "The main reason this team struggled this season was their turnover problem. \
    Using the statistics, explain how turnovers affected the team’s performance.";

pub const H3_CAUSE_B_PRIMED: &str = "The main reason this team struggled this season was their shooting from long range. \
    Using the statistics, explain how long-range shooting affected the team’s performance.";

pub const H3_NEUTRAL: &str = "Without assuming a cause in advance, use the statistics to briefly identify \
    the top two or three factors that most likely explain the team’s negative scoring margin or underperformance.";

// H4 — Player C: anchor vs weakness

pub const H4_ANCHOR: &str = "Player C is the main interior player and leads the team in rebounding. \
    Based on their statistics, in what ways do they anchor the team’s interior play?";

pub const H4_WEAKNESS: &str = "Player C plays heavy minutes but has some weaknesses in efficiency \
    (for example, free-throw shooting). Based on their statistics, how might these weaknesses \
    affect end-of-game situations?";

pub const H4_NEUTRAL: &str = "Using their rebounding, scoring, efficiency, and defensive statistics, \
    briefly summarize Player C’s overall impact.";
