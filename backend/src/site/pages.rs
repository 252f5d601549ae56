// src/site/pages.rs

use askama::Template;
use chrono::{Datelike, Utc};

use crate::site::content::{
    LearnPage, PortfolioItem, ServiceCard, PORTFOLIO_ITEMS, QUOTE_SERVICES, SERVICES, TAGLINE,
};

/// Bits of `base.html` every page shares.
pub struct Shell<'a> {
    pub site_name: &'a str,
    pub title: &'a str,
    pub path: &'a str,
    pub tagline: &'static str,
    pub year: i32,
}

impl<'a> Shell<'a> {
    pub fn new(site_name: &'a str, title: &'a str, path: &'a str) -> Self {
        Self {
            site_name,
            title,
            path,
            tagline: TAGLINE,
            year: Utc::now().year(),
        }
    }

    pub fn nav_class(&self, href: &str) -> &'static str {
        if href == self.path {
            "navItem active"
        } else {
            "navItem"
        }
    }
}

const SELLING_POINTS: [&str; 3] = [
    "Licensed & Insured",
    "15+ Years Experience",
    "100% Satisfaction Guarantee",
];

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate<'a> {
    shell: Shell<'a>,
    selling_points: &'static [&'static str],
    services: &'static [ServiceCard],
    portfolio: &'static [PortfolioItem],
    quote_services: &'static [&'static str],
    form_page: &'static str,
}

#[derive(Template)]
#[template(path = "services.html")]
struct ServicesTemplate<'a> {
    shell: Shell<'a>,
    services: &'static [ServiceCard],
}

#[derive(Template)]
#[template(path = "learn.html")]
struct LearnTemplate<'a> {
    shell: Shell<'a>,
    learn: &'static LearnPage,
}

#[derive(Template)]
#[template(path = "portfolio.html")]
struct PortfolioTemplate<'a> {
    shell: Shell<'a>,
    portfolio: &'static [PortfolioItem],
}

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactTemplate<'a> {
    shell: Shell<'a>,
    quote_services: &'static [&'static str],
    form_page: &'static str,
}

pub fn home(site_name: &str) -> askama::Result<String> {
    HomeTemplate {
        shell: Shell::new(site_name, "Home", "/"),
        selling_points: &SELLING_POINTS,
        services: &SERVICES,
        portfolio: &PORTFOLIO_ITEMS,
        quote_services: &QUOTE_SERVICES,
        form_page: "/",
    }
    .render()
}

pub fn services(site_name: &str) -> askama::Result<String> {
    ServicesTemplate {
        shell: Shell::new(site_name, "Services", "/services"),
        services: &SERVICES,
    }
    .render()
}

pub fn learn(site_name: &str, learn: &'static LearnPage) -> askama::Result<String> {
    let path = format!("/learn/{}", learn.slug);
    LearnTemplate {
        shell: Shell::new(site_name, learn.title, &path),
        learn,
    }
    .render()
}

pub fn portfolio(site_name: &str) -> askama::Result<String> {
    PortfolioTemplate {
        shell: Shell::new(site_name, "Portfolio", "/portfolio"),
        portfolio: &PORTFOLIO_ITEMS,
    }
    .render()
}

pub fn contact(site_name: &str) -> askama::Result<String> {
    ContactTemplate {
        shell: Shell::new(site_name, "Contact", "/contact"),
        quote_services: &QUOTE_SERVICES,
        form_page: "/contact",
    }
    .render()
}
