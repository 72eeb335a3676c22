//! Static portfolio copy rendered by the page sections.

/// A navigation entry; `id` is the target `section[id]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry { id: "inicio", label: "Inicio" },
    NavEntry { id: "sobre-mi", label: "Sobre mí" },
    NavEntry { id: "habilidades", label: "Habilidades" },
    NavEntry { id: "proyectos", label: "Proyectos" },
    NavEntry { id: "servicios", label: "Servicios" },
    NavEntry { id: "contacto", label: "Contacto" },
];

pub const OWNER_NAME: &str = "Alex Rivera";
pub const HERO_GREETING: &str = "Hola, soy";
pub const HERO_SUBTITLE: &str = "Desarrollador Full Stack & Diseñador UI";
pub const HERO_DESCRIPTION: &str =
    "Construyo aplicaciones web rápidas, accesibles y cuidadas en cada detalle, desde la base de datos hasta la interfaz.";

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "Llevo más de cinco años creando productos digitales para startups y agencias. Disfruto convertir ideas \
     difusas en interfaces claras y sistemas fiables.",
    "Trabajo de cerca con diseño y negocio para entregar software que se entiende, se mantiene y crece.",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "50+", label: "Proyectos completados" },
    Stat { value: "5+", label: "Años de experiencia" },
    Stat { value: "30+", label: "Clientes satisfechos" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub icon: &'static str,
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory { icon: "fa-code", title: "Frontend", skills: &["HTML5", "CSS3", "TypeScript", "Rust + WASM"] },
    SkillCategory { icon: "fa-server", title: "Backend", skills: &["Rust", "Node.js", "PostgreSQL", "REST"] },
    SkillCategory { icon: "fa-tools", title: "Herramientas", skills: &["Git", "Docker", "Figma", "CI/CD"] },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub url: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Tienda en línea",
        description: "Comercio electrónico con carrito, pagos y panel de administración.",
        image: "/images/project-shop.svg",
        tags: &["Rust", "PostgreSQL", "Stripe"],
        url: "#",
    },
    Project {
        title: "Gestor de tareas",
        description: "Aplicación colaborativa en tiempo real con tableros y notificaciones.",
        image: "/images/project-tasks.svg",
        tags: &["WebSockets", "Leptos"],
        url: "#",
    },
    Project {
        title: "Panel de analítica",
        description: "Visualización de métricas de negocio con informes exportables.",
        image: "/images/project-analytics.svg",
        tags: &["TypeScript", "D3"],
        url: "#",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "fa-laptop-code",
        title: "Desarrollo web",
        description: "Sitios y aplicaciones a medida, rápidos y preparados para crecer.",
    },
    Service {
        icon: "fa-mobile-alt",
        title: "Diseño responsive",
        description: "Interfaces que se ven y funcionan bien en cualquier pantalla.",
    },
    Service {
        icon: "fa-rocket",
        title: "Optimización",
        description: "Auditorías de rendimiento y accesibilidad con mejoras medibles.",
    },
];

pub const CONTACT_EMAIL: &str = "hola@alexrivera.dev";
pub const CONTACT_LOCATION: &str = "Madrid, España";

/// Inter, preloaded in the document head.
pub const FONT_STYLESHEET_URL: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap";
