//! 激励消息池（法语）
//!
//! 每个池内的消息语义相同，随机选取一条。

/// push 事件
pub const PUSH: &[&str] = &[
    "Excellent travail sur ce commit ! 🚀 Continue comme ça, tu es sur la bonne voie !",
    "Superbe commit ! 💪 Chaque ligne de code nous rapproche du succès !",
    "Bravo pour ce push ! 🎉 Ta détermination porte ses fruits !",
    "Fantastique ! 🌟 Ce commit montre ton engagement et ta qualité de travail !",
    "Formidable ! 👏 Continue à coder avec cette passion !",
];

/// PR 打开
pub const PULL_REQUEST_OPENED: &[&str] = &[
    "Excellente PR ! 🎯 Ta contribution va faire la différence !",
    "Superbe pull request ! 🔥 L'équipe va adorer ton travail !",
    "Bravo pour cette PR ! 💡 Tes idées sont toujours pertinentes !",
    "Fantastique contribution ! 🚀 Continue à proposer d'excellentes améliorations !",
    "Magnifique travail ! ✨ Cette PR montre ton expertise !",
];

/// PR 已合并
pub const PULL_REQUEST_MERGED: &[&str] = &[
    "Pull request fusionnée ! 🎉 Allez, passe à la prochaine fonctionnalité !",
    "Merge réussi ! 🚀 Ton code est maintenant en production, félicitations !",
    "Parfait ! 💯 Une autre feature de qualité qui rejoint la base de code !",
    "Excellent ! 🌟 Ton travail améliore constamment notre projet !",
    "Bravo ! 🏆 Cette fusion marque encore un succès dans ton parcours !",
];

/// PR 关闭但未合并
pub const PULL_REQUEST_CLOSED: &[&str] = &[
    "Pas de souci pour cette PR ! 💪 Chaque tentative nous rapproche de la perfection !",
    "Continue ! 🚀 Les meilleures idées naissent souvent après plusieurs essais !",
    "Garde le cap ! ⭐ Ton prochain PR sera encore meilleur !",
    "Excellent esprit ! 🔥 L'innovation nécessite parfois plusieurs itérations !",
    "Persévère ! 💡 Tes efforts constants mènent toujours au succès !",
];

/// review 提交
pub const REVIEW: &[&str] = &[
    "Merci pour cette review ! 👀 Ton œil expert améliore la qualité du code !",
    "Excellente review ! 🔍 Tes commentaires sont toujours constructifs !",
    "Superbe analyse ! 💡 Ton feedback aide toute l'équipe à progresser !",
    "Bravo pour cette review ! 🎯 Ta rigueur est précieuse pour le projet !",
    "Merci ! 🙏 Tes reviews maintiennent nos standards de qualité élevés !",
];

/// 未识别事件的兜底消息
pub fn fallback(actor: &str) -> String {
    format!("Excellent travail {} ! 🌟 Continue ton super boulot !", actor)
}

/// 各池对应的图标
pub mod icon {
    pub const PUSH: &str = "🚀";
    pub const PULL_REQUEST_OPENED: &str = "🎯";
    pub const PULL_REQUEST_MERGED: &str = "🎉";
    pub const PULL_REQUEST_CLOSED: &str = "💪";
    pub const REVIEW: &str = "👀";
    pub const FALLBACK: &str = "⭐";
}
