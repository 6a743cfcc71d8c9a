/// Resolves a localization key to a message in the current locale
///
/// Implemented by the host's localization layer. Implementations must be
/// thread-safe; the core does not synchronize access
pub trait MessageResolver: Send + Sync {
    fn resolve(&self, key: &str) -> String;
}

/// Built-in resolver backed by the platform's Ukrainian message catalog
///
/// Unknown keys resolve to the key itself so a missing catalog entry is
/// visible rather than silent
#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogMessageResolver;

/// User-facing titles, one entry per catalog member
static CATALOG: [(&str, &str); 19] = [
    ("data-factory.error.client-error", "Помилка клієнта"),
    (
        "data-factory.error.header-are-missing",
        "Відсутні обов'язкові заголовки запиту",
    ),
    (
        "data-factory.error.invalid-header-value",
        "Невірне значення заголовка запиту",
    ),
    (
        "data-factory.error.authentication-failed",
        "Помилка автентифікації",
    ),
    ("data-factory.error.forbidden-operation", "Операція заборонена"),
    (
        "data-factory.error.jwt-expired",
        "Строк дії токена доступу завершився",
    ),
    ("data-factory.error.not-found", "Ресурс не знайдено"),
    (
        "data-factory.error.constraint-violation",
        "Порушення обмежень даних",
    ),
    (
        "data-factory.error.signature-violation",
        "Порушення підпису даних",
    ),
    (
        "data-factory.error.validation-error",
        "Значення змінної не відповідає правилам вказаним в домені",
    ),
    ("data-factory.error.file-not-found", "Файл не знайдено"),
    (
        "data-factory.error.method-argument-type-mismatch",
        "Невірний тип аргументу запиту",
    ),
    (
        "data-factory.error.unsupported-media-type",
        "Формат даних не підтримується",
    ),
    (
        "data-factory.error.third-party-service-unavailable",
        "Зовнішній сервіс недоступний",
    ),
    (
        "data-factory.error.internal-contract-violation",
        "Порушення внутрішнього контракту",
    ),
    (
        "data-factory.error.timeout-error",
        "Перевищено час очікування відповіді",
    ),
    ("data-factory.error.file-was-changed", "Файл було змінено"),
    ("data-factory.error.runtime-error", "Щось пішло не так"),
    ("data-factory.error.service-unavailable", "Сервіс недоступний"),
];

impl MessageResolver for CatalogMessageResolver {
    fn resolve(&self, key: &str) -> String {
        CATALOG
            .iter()
            .find(|(catalog_key, _)| *catalog_key == key)
            .map_or_else(|| key.to_owned(), |(_, title)| (*title).to_owned())
    }
}
