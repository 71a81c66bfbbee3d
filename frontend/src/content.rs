// Static copy for the landing page. Everything here is fixed at build time;
// the components only read it.

pub const IMAGE_HOST: &str = "https://picsum.photos";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Users,
    Award,
    Briefcase,
    Scale,
    Gavel,
    ShieldCheck,
    HeartHandshake,
    FileText,
    Clock,
    Message,
    ChevronDown,
    ChevronUp,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Users => "👥",
            Icon::Award => "🏅",
            Icon::Briefcase => "💼",
            Icon::Scale => "⚖️",
            Icon::Gavel => "🔨",
            Icon::ShieldCheck => "🛡️",
            Icon::HeartHandshake => "🤝",
            Icon::FileText => "📄",
            Icon::Clock => "⏱️",
            Icon::Message => "💬",
            Icon::ChevronDown => "▾",
            Icon::ChevronUp => "▴",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Icon::Users => "Pessoas",
            Icon::Award => "Prêmio",
            Icon::Briefcase => "Pasta",
            Icon::Scale => "Balança",
            Icon::Gavel => "Martelo",
            Icon::ShieldCheck => "Escudo",
            Icon::HeartHandshake => "Aperto de mãos",
            Icon::FileText => "Documento",
            Icon::Clock => "Relógio",
            Icon::Message => "Mensagem",
            Icon::ChevronDown => "Expandir",
            Icon::ChevronUp => "Recolher",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceArea {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub icon: Icon,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub text: &'static str,
    pub avatar_seed: u32,
}

/// One hand-authored question/answer pair. The visibility flag is not part
/// of the content; see [`crate::disclosure::FaqEntry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqContent {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const BRAND: &str = "Advocacia";
pub const BRAND_ACCENT: &str = "Especializada";

pub const HERO_BADGE: &str = "20 Anos de Experiência Jurídica";
pub const HERO_HEADLINE: &str = "Defenda seus Direitos com";
pub const HERO_HEADLINE_ACCENT: &str = "Comprometimento";
pub const HERO_HEADLINE_TAIL: &str = "e Autoridade";
pub const HERO_SUBTITLE: &str = "Soluções jurídicas personalizadas em Direito Civil, Família, Previdenciário e Trabalhista. Atuação com transparência, empatia e o rigor de duas décadas de prática jurídica.";
pub const HERO_SOCIAL_PROOF: &str = "Mais de +1.500 casos atendidos com sucesso";
pub const HERO_AVATAR_SEEDS: [u32; 3] = [11, 12, 13];

pub const STATS: &[Stat] = &[
    Stat { value: "20", label: "Anos de Carreira" },
    Stat { value: "1.5k+", label: "Processos Atuados" },
    Stat { value: "98%", label: "Transparência Total" },
    Stat { value: "100%", label: "Foco no Cliente" },
];

pub const SERVICES_TITLE: &str = "Especialidades de Atuação";
pub const SERVICES_SUBTITLE: &str = "Oferecemos suporte jurídico completo nas áreas que mais impactam sua vida e seu patrimônio.";

pub const SERVICE_AREAS: &[ServiceArea] = &[
    ServiceArea {
        icon: Icon::Users,
        title: "Direito de Família",
        description: "Divórcios, guarda de filhos, pensão alimentícia e inventários. Atuação humanizada para momentos delicados.",
    },
    ServiceArea {
        icon: Icon::Award,
        title: "Previdenciário",
        description: "Planejamento de aposentadoria, auxílio-doença, BPC/LOAS e revisões de benefícios junto ao INSS.",
    },
    ServiceArea {
        icon: Icon::Briefcase,
        title: "Direito Trabalhista",
        description: "Defesa dos direitos do trabalhador e consultoria empresarial para demandas laborais complexas.",
    },
    ServiceArea {
        icon: Icon::Scale,
        title: "Direito Civil",
        description: "Indenizações, danos morais, contratos, direito de propriedade e responsabilidade civil em geral.",
    },
    ServiceArea {
        icon: Icon::Gavel,
        title: "Empresarial",
        description: "Suporte para empresas em contratos, gestão de conflitos societários e proteção patrimonial.",
    },
    ServiceArea {
        icon: Icon::ShieldCheck,
        title: "Direito do Consumidor",
        description: "Ações contra abusos de bancos, operadoras de telefonia, planos de saúde e compras online.",
    },
];

pub const EXPERIENCE_TITLE: &str = "Mais que Processos,";
pub const EXPERIENCE_TITLE_ACCENT: &str = "Vidas e Direitos";
pub const EXPERIENCE_INTRO: &str = "A advocacia moderna exige técnica apurada, mas acima de tudo, exige";
pub const EXPERIENCE_INTRO_STRONG: &str = "Humanidade e Empatia";
pub const EXPERIENCE_INTRO_TAIL: &str = ". Em 20 anos de prática jurídica, aprendi que cada cliente traz uma história que merece ser ouvida com dedicação absoluta.";
pub const EXPERIENCE_BADGE_VALUE: &str = "20+";
pub const EXPERIENCE_BADGE_LABEL: &str = "Anos de Experiência";

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight { icon: Icon::HeartHandshake, text: "Atendimento Humanizado e Próximo" },
    Highlight { icon: Icon::FileText, text: "Transparência Total em cada Movimentação" },
    Highlight { icon: Icon::Clock, text: "Agilidade e Rigor nos Prazos" },
    Highlight { icon: Icon::ShieldCheck, text: "Comprometimento com a Melhor Solução" },
];

pub const TESTIMONIALS_TITLE: &str = "O que dizem os clientes";
pub const TESTIMONIALS_SUBTITLE: &str = "A confiança é o pilar do nosso trabalho. Veja o depoimento de quem já teve seus problemas solucionados.";

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Carlos Eduardo",
        role: "Empresário",
        text: "Excelente profissional. Resolveu uma demanda trabalhista complexa com rapidez e muita transparência. Recomendo fortemente.",
        avatar_seed: 50,
    },
    Testimonial {
        name: "Maria Silva",
        role: "Aposentada",
        text: "Graças ao doutor, consegui minha aposentadoria após anos de luta com o INSS. Um atendimento muito humano e educado.",
        avatar_seed: 51,
    },
    Testimonial {
        name: "João Pedro",
        role: "Cliente de Direito Civil",
        text: "Sempre fui mantido informado sobre cada passo do meu processo. A empatia e o cuidado com o cliente são os diferenciais aqui.",
        avatar_seed: 52,
    },
];

pub const FAQ_TITLE: &str = "Dúvidas Frequentes";

pub const FAQ: &[FaqContent] = &[
    FaqContent {
        question: "Quanto custa uma consulta jurídica?",
        answer: "Os honorários são avaliados caso a caso, seguindo rigorosamente a tabela da OAB e considerando a complexidade da demanda. No primeiro contato, explicamos toda a estrutura de custos de forma transparente.",
    },
    FaqContent {
        question: "Atendem em todo o Brasil?",
        answer: "Sim. Com a digitalização dos processos (PJe), atuamos em tribunais de todo o país de forma remota, mantendo a mesma qualidade e proximidade do atendimento presencial.",
    },
    FaqContent {
        question: "Como acompanho o meu processo?",
        answer: "Nossa equipe envia relatórios mensais e informamos imediatamente qualquer movimentação relevante via WhatsApp ou E-mail. Você nunca fica sem saber o que está acontecendo.",
    },
    FaqContent {
        question: "Quais documentos preciso para começar?",
        answer: "Depende da área de atuação. Geralmente, RG, CPF e comprovante de residência são básicos. Para áreas específicas como trabalhista ou previdenciária, orientamos a lista completa no primeiro atendimento.",
    },
];

pub const CLOSING_TITLE: &str = "Ainda tem dúvidas sobre o seu caso?";
pub const CLOSING_TEXT: &str = "Não deixe seus direitos prescreverem. Clique no botão abaixo e fale agora mesmo com um especialista.";

pub const FOOTER_RIGHTS: &str = "Todos os direitos reservados.";
pub const FOOTER_DISCLAIMER: &str = "IMPORTANTE: Estas informações não substituem a consulta direta com um advogado. O atendimento via WhatsApp não constitui relação advogado-cliente automática até a formalização do contrato de honorários.";

pub fn avatar_url(seed: u32, size: u32) -> String {
    format!("{}/seed/{}/{}/{}", IMAGE_HOST, seed, size, size)
}

pub fn portrait_url() -> String {
    format!("{}/seed/legalpro/800/1000", IMAGE_HOST)
}
