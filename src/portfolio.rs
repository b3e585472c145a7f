use std::collections::HashSet;
use std::sync::LazyLock;

use rust_embed::Embed;
use serde::Deserialize;
use thiserror::Error;

static CONTENT_FILE: &str = "portfolio.json";

static GLOBAL_PORTFOLIO: LazyLock<Result<Portfolio, PortfolioError>> =
    LazyLock::new(|| load(CONTENT_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavItem {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Percentage, 0..=100
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub location: String,
    pub github: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Portfolio {
    pub name: String,
    pub title: String,
    pub roles: Vec<String>,
    pub intro: String,
    pub hero_image: String,
    pub nav: Vec<NavItem>,
    pub about: Vec<String>,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub contact: ContactInfo,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortfolioError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse content: {0}")]
    ParseError(String),
    #[error("Duplicate section id: {0}")]
    DuplicateSection(String),
    #[error("Duplicate skill category: {0}")]
    DuplicateCategory(String),
    #[error("Skill level out of range for {0}")]
    InvalidLevel(String),
}

impl Portfolio {
    pub fn from_json(raw: &str) -> Result<Self, PortfolioError> {
        let portfolio = serde_json::from_str::<Portfolio>(raw)
            .map_err(|e| PortfolioError::ParseError(e.to_string()))?;
        portfolio.check()?;
        Ok(portfolio)
    }

    pub fn section_ids(&self) -> Vec<String> {
        self.nav.iter().map(|n| n.id.clone()).collect()
    }

    fn check(&self) -> Result<(), PortfolioError> {
        let mut seen = HashSet::new();
        if let Some(dup) = self.nav.iter().find(|n| !seen.insert(n.id.as_str())) {
            return Err(PortfolioError::DuplicateSection(dup.id.clone()));
        }
        let mut categories = HashSet::new();
        if let Some(dup) = self
            .skills
            .iter()
            .find(|c| !categories.insert(c.name.as_str()))
        {
            return Err(PortfolioError::DuplicateCategory(dup.name.clone()));
        }
        if let Some(skill) = self
            .skills
            .iter()
            .flat_map(|c| c.skills.iter())
            .find(|s| s.level > 100)
        {
            return Err(PortfolioError::InvalidLevel(skill.name.clone()));
        }
        Ok(())
    }
}

pub fn load(name: &str) -> Result<Portfolio, PortfolioError> {
    let file = Content::get(name).ok_or_else(|| PortfolioError::NotFound(name.to_string()))?;
    let raw = std::str::from_utf8(&file.data)
        .map_err(|e| PortfolioError::ParseError(e.to_string()))?;
    Portfolio::from_json(raw)
}

/// The page content, parsed once.
pub fn portfolio() -> Result<&'static Portfolio, PortfolioError> {
    GLOBAL_PORTFOLIO.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let p = portfolio().expect("embedded portfolio should parse");
        assert_eq!(
            p.section_ids(),
            vec!["home", "about", "skills", "projects", "contact"]
        );
        assert_eq!(p.roles.len(), 3);
        assert!(!p.skills.is_empty());
        assert!(p.skills.iter().all(|c| !c.skills.is_empty()));
    }

    #[test]
    fn test_missing_file() {
        assert_eq!(
            load("nope.json"),
            Err(PortfolioError::NotFound("nope.json".to_string()))
        );
    }

    #[test]
    fn test_rejects_bad_content() {
        let raw = Content::get(CONTENT_FILE).unwrap();
        let mut value: serde_json::Value = serde_json::from_slice(&raw.data).unwrap();

        value["nav"][1]["id"] = "home".into();
        let res = Portfolio::from_json(&value.to_string());
        assert_eq!(res, Err(PortfolioError::DuplicateSection("home".to_string())));

        value["nav"][1]["id"] = "about".into();
        let first = value["skills"][0]["name"].clone();
        value["skills"][1]["name"] = first.clone();
        let res = Portfolio::from_json(&value.to_string());
        assert_eq!(
            res,
            Err(PortfolioError::DuplicateCategory(first.as_str().unwrap().to_string()))
        );

        value["skills"][1]["name"] = "Backend".into();
        value["skills"][0]["skills"][0]["level"] = 101.into();
        let res = Portfolio::from_json(&value.to_string());
        assert!(matches!(res, Err(PortfolioError::InvalidLevel(_))));

        assert!(matches!(
            Portfolio::from_json("{}"),
            Err(PortfolioError::ParseError(_))
        ));
    }
}
