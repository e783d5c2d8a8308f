//! Small sales domain used by the integration tests.

#![allow(dead_code)]

use domainkit_core::{
    AggregateId, AggregateRoot, AsComponent, Component, DomainError, DomainEvent, DomainResult,
    Entity, EventLog, Identity, ValueObject,
};

/// Amount in the smallest currency unit plus ISO currency code.
#[derive(Debug, Clone)]
pub struct Money {
    amount: i64,
    currency: String,
}

impl Money {
    pub fn new(amount: i64, currency: &str) -> DomainResult<Self> {
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(DomainError::validation(format!("invalid currency code `{currency}`")));
        }
        Ok(Self {
            amount,
            currency: currency.to_string(),
        })
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn times(&self, quantity: u32) -> Self {
        Self {
            amount: self.amount * i64::from(quantity),
            currency: self.currency.clone(),
        }
    }
}

impl ValueObject for Money {
    fn equality_components(&self) -> Vec<Component<'_>> {
        vec![self.amount.as_component(), self.currency.as_component()]
    }
}

domainkit_core::value_object!(Money);

/// Customer e-mail address (validated on construction).
#[derive(Debug, Clone)]
pub struct Email(String);

impl Email {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let raw = raw.trim();
        match raw.split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => {
                Ok(Self(raw.to_ascii_lowercase()))
            }
            _ => Err(DomainError::validation(format!("invalid e-mail `{raw}`"))),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Email {
    fn equality_components(&self) -> Vec<Component<'_>> {
        vec![self.0.as_component()]
    }
}

domainkit_core::value_object!(Email);

domainkit_core::single_value_object! {
    /// Stock keeping unit.
    pub struct Sku(String);
}

domainkit_core::enumeration! {
    /// Product colors.
    pub struct Color {
        RED = (1, "Red"),
        GREEN = (2, "Green"),
        BLUE = (3, "Blue"),
    }
}

domainkit_core::enumeration! {
    /// Order lifecycle.
    pub struct OrderStatus {
        DRAFT = (1, "Draft"),
        SUBMITTED = (2, "Submitted"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub sku: Sku,
    pub quantity: u32,
    pub unit_price: Money,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderEvent {
    LineAdded(OrderLine),
    Submitted { total: Money },
}

impl DomainEvent for OrderEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::LineAdded(_) => "sales.order.line_added",
            OrderEvent::Submitted { .. } => "sales.order.submitted",
        }
    }
}

/// Aggregate root: Order.
#[derive(Debug)]
pub struct Order {
    identity: Identity<AggregateId>,
    customer: Email,
    status: OrderStatus,
    lines: Vec<OrderLine>,
    events: EventLog<OrderEvent>,
}

impl Order {
    /// A new, not-yet-persisted order.
    pub fn new(customer: Email) -> Self {
        Self {
            identity: Identity::transient(),
            customer,
            status: OrderStatus::DRAFT,
            lines: Vec::new(),
            events: EventLog::new(),
        }
    }

    /// An order loaded from storage (no pending events).
    pub fn persisted(id: AggregateId, customer: Email) -> Self {
        Self {
            identity: Identity::new(id),
            ..Self::new(customer)
        }
    }

    /// Called by the repository when the order is first stored.
    pub fn assign_id(&mut self, id: AggregateId) -> DomainResult<()> {
        self.identity.assign(id)
    }

    pub fn customer(&self) -> &Email {
        &self.customer
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn add_line(&mut self, sku: Sku, quantity: u32, unit_price: Money) -> DomainResult<()> {
        if self.status != OrderStatus::DRAFT {
            return Err(DomainError::invariant("only draft orders accept new lines"));
        }
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        if let Some(first) = self.lines.first() {
            if first.unit_price.currency() != unit_price.currency() {
                return Err(DomainError::invariant("order lines must share one currency"));
            }
        }

        let line = OrderLine {
            sku,
            quantity,
            unit_price,
        };
        self.lines.push(line.clone());
        self.events.record(OrderEvent::LineAdded(line));
        Ok(())
    }

    pub fn submit(&mut self) -> DomainResult<()> {
        if self.status != OrderStatus::DRAFT {
            return Err(DomainError::invariant("order already submitted"));
        }
        let Some(first) = self.lines.first() else {
            return Err(DomainError::invariant("cannot submit an empty order"));
        };

        let amount = self
            .lines
            .iter()
            .map(|line| line.unit_price.times(line.quantity).amount())
            .sum();
        let total = Money::new(amount, first.unit_price.currency())?;

        self.status = OrderStatus::SUBMITTED;
        self.events.record(OrderEvent::Submitted { total });
        Ok(())
    }
}

impl Entity for Order {
    type Id = AggregateId;

    fn id(&self) -> &AggregateId {
        self.identity.get()
    }
}

domainkit_core::impl_entity_identity!(Order);

impl AggregateRoot for Order {
    type Event = OrderEvent;

    fn domain_events(&self) -> &[OrderEvent] {
        self.events.as_slice()
    }

    fn clear_events(&mut self) {
        self.events.clear();
    }
}

pub fn usd(amount: i64) -> Money {
    Money::new(amount, "USD").unwrap()
}

pub fn customer() -> Email {
    Email::parse("buyer@example.com").unwrap()
}
